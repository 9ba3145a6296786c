use std::time::Duration;

use anyhow::Result;

use herfa_application::Herfa;
use herfa_core::format::{format_date_time, format_request_status};
use herfa_core::models::{Id, ServiceRequest};

/// Prints the request once, then every status change until Ctrl-C.
pub async fn watch(herfa: &Herfa, id: Id, interval_secs: Option<u64>) -> Result<()> {
    let initial = herfa.requests().get(id).await?;
    println!("#{} {}", initial.id, format_request_status(initial.status));

    let mut last = initial.status;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let callback = move |request: ServiceRequest| {
        let _ = tx.send(request);
    };
    let handle = match interval_secs {
        Some(secs) => herfa
            .requests()
            .poll_status_every(id, Duration::from_secs(secs.max(1)), callback),
        None => herfa.requests().poll_status(id, callback),
    };

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(request) = rx.recv() => {
                if request.status != last {
                    last = request.status;
                    let when = request
                        .updated_at
                        .as_ref()
                        .map(format_date_time)
                        .unwrap_or_default();
                    println!("#{} {} {}", request.id, format_request_status(request.status), when);
                    if let Some(reason) = &request.rejected_reason {
                        println!("  السبب: {}", reason);
                    }
                }
            }
        }
    }

    handle.join().await;
    Ok(())
}
