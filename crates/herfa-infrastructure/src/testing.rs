//! In-memory transport that records requests and replays scripted responses.
//!
//! Lets service tests run without a backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use herfa_core::error::{HerfaError, Result};
use herfa_core::upload::UploadFile;

use crate::http::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody};

enum Scripted {
    Respond(ApiResponse),
    NetworkFailure,
}

#[derive(Default)]
struct Route {
    queue: Vec<Scripted>,
}

/// Scripted transport keyed by method and path (query ignored).
///
/// Each route holds a queue of responses; the last one repeats once the
/// queue is drained. Unknown routes answer 404.
#[derive(Default)]
pub struct RecordingTransport {
    routes: Mutex<HashMap<(Method, String), Route>>,
    requests: Mutex<Vec<ApiRequest>>,
    calls: AtomicUsize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response for `method path`.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.push(method, path, Scripted::Respond(ApiResponse::new(status, body.to_string())))
    }

    /// Queues a raw (possibly non-JSON) response.
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, Scripted::Respond(ApiResponse::new(status, body)))
    }

    /// Queues a transport failure (no response received).
    pub fn fail(&self, method: Method, path: &str) -> &Self {
        self.push(method, path, Scripted::NetworkFailure)
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted) -> &Self {
        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        routes
            .entry((method, path.to_string()))
            .or_default()
            .queue
            .push(scripted);
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests().pop()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of requests sent to `method path`.
    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = (request.method, request.path.clone());
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(route) = routes.get_mut(&key) else {
            return Ok(ApiResponse::new(404, r#"{"message":"Not Found"}"#));
        };
        let scripted = if route.queue.len() > 1 {
            route.queue.remove(0)
        } else {
            match route.queue.first() {
                Some(Scripted::Respond(response)) => Scripted::Respond(response.clone()),
                Some(Scripted::NetworkFailure) => Scripted::NetworkFailure,
                None => return Ok(ApiResponse::new(404, r#"{"message":"Not Found"}"#)),
            }
        };
        match scripted {
            Scripted::Respond(response) => Ok(response),
            Scripted::NetworkFailure => Err(HerfaError::network("connection refused")),
        }
    }
}

/// Multipart file parts of a recorded request, by field name.
pub fn multipart_files(request: &ApiRequest) -> Vec<(&str, &UploadFile)> {
    match &request.body {
        RequestBody::Multipart { files, .. } => {
            files.iter().map(|(name, file)| (name.as_str(), file)).collect()
        }
        _ => Vec::new(),
    }
}

/// Multipart text fields of a recorded request.
pub fn multipart_fields(request: &ApiRequest) -> Vec<(&str, &str)> {
    match &request.body {
        RequestBody::Multipart { fields, .. } => fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect(),
        _ => Vec::new(),
    }
}
