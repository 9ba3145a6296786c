//! Periodic re-fetch of a request until stopped.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

use herfa_core::models::{Id, ServiceRequest};

use crate::request_service::RequestService;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle of a running poll. Dropping it stops the poll too.
pub struct PollHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Stops polling. No callback runs after this returns.
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stops polling and waits for the task to finish.
    pub async fn join(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Poll task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Fetches request `id` every `period` and hands it to `callback`.
///
/// The first fetch happens one period after the start. Fetch errors are
/// logged and the next tick proceeds; there is no backoff. A zero period is
/// raised to one millisecond.
pub(crate) fn spawn<F>(service: RequestService, id: Id, period: Duration, callback: F) -> PollHandle
where
    F: Fn(ServiceRequest) + Send + Sync + 'static,
{
    let period = period.max(MIN_PERIOD);
    let token = CancellationToken::new();
    let child = token.clone();

    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        tracing::debug!("Polling request {} every {:?}", id, period);

        loop {
            tokio::select! {
                biased;
                _ = child.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                biased;
                _ = child.cancelled() => break,
                result = service.get(id) => result,
            };

            match result {
                Ok(request) => callback(request),
                Err(e) => tracing::error!("Error polling request {} status: {}", id, e),
            }
        }
        tracing::debug!("Stopped polling request {}", id);
    });

    PollHandle {
        token,
        task: Some(task),
    }
}
