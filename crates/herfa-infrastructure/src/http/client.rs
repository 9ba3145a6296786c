//! The request pipeline every service goes through.
//!
//! Attaches the bearer token, classifies failures, and on a 401 forgets
//! the session and fires the login redirect before returning the error.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use herfa_core::error::{ApiErrorBody, HerfaError, Result};
use herfa_core::messages;
use herfa_core::upload::UploadFile;

use super::transport::{ApiRequest, HttpTransport, Method, RequestBody, query_pairs};
use crate::session_store::SessionStore;

/// Called once per 401 response, after the session has been cleared.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

/// Default handler: logs the redirect target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRedirect;

impl UnauthorizedHandler for LoggingRedirect {
    fn on_unauthorized(&self) {
        tracing::info!("Session expired, redirecting to /login");
    }
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionStore>,
    on_unauthorized: Arc<dyn UnauthorizedHandler>,
    base_url: String,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        session: Arc<SessionStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            session,
            on_unauthorized: Arc::new(LoggingRedirect),
            base_url: base_url.into(),
        }
    }

    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.on_unauthorized = handler;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Turns a stored asset path into an absolute URL.
    ///
    /// Absolute `http(s)` URLs pass through, relative paths are prefixed with
    /// the base URL, and an empty path yields `None`.
    pub fn asset_url(&self, path: Option<&str>) -> Option<String> {
        let path = path?.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http") {
            return Some(path.to_string());
        }
        Some(format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::Get, path).with_query(query_pairs(query)?);
        self.send(request).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::Post, path).with_body(json_body(body)?);
        self.send(request).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::Patch, path).with_body(json_body(body)?);
        self.send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::new(Method::Delete, path)).await
    }

    /// `multipart/form-data` POST.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        files: Vec<(String, UploadFile)>,
        fields: Vec<(String, String)>,
    ) -> Result<T> {
        let request =
            ApiRequest::new(Method::Post, path).with_body(RequestBody::Multipart { files, fields });
        self.send(request).await
    }

    /// Sends `request` through the pipeline and decodes a 2xx body into `T`.
    pub async fn send<T: DeserializeOwned>(&self, mut request: ApiRequest) -> Result<T> {
        request.bearer = self.session.token();
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!("{} {}", method.as_str(), path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    "{} {}: {} ({})",
                    method.as_str(),
                    path,
                    messages::diagnostic_for(None),
                    err
                );
                return Err(err);
            }
        };

        if response.is_success() {
            return decode(&response.body);
        }

        let status = response.status;
        tracing::warn!(
            "{} {} -> {}: {}",
            method.as_str(),
            path,
            status,
            messages::diagnostic_for(Some(status))
        );

        if status == 401 {
            if let Err(e) = self.session.clear() {
                tracing::warn!("Failed to clear stored session: {}", e);
            }
            self.on_unauthorized.on_unauthorized();
        }

        Err(HerfaError::api(status, ApiErrorBody::parse(&response.body)))
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody> {
    Ok(RequestBody::Json(serde_json::to_value(body)?))
}

/// Empty bodies decode as JSON `null`, so `()` and `Option<_>` accept them.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        Ok(serde_json::from_str("null")?)
    } else {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::testing::RecordingTransport;
    use herfa_core::storage::{LocalStore, keys};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingRedirect(AtomicUsize);

    impl UnauthorizedHandler for CountingRedirect {
        fn on_unauthorized(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn client_with(
        transport: Arc<RecordingTransport>,
        store: Arc<MemoryStore>,
    ) -> (ApiClient, Arc<CountingRedirect>) {
        let session = Arc::new(SessionStore::hydrate(store));
        let redirect = Arc::new(CountingRedirect::default());
        let client = ApiClient::new(transport, session, "http://localhost:3000")
            .with_unauthorized_handler(redirect.clone());
        (client, redirect)
    }

    #[tokio::test]
    async fn test_bearer_attached_when_logged_in() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(Method::Get, "/auth/profile", 200, json!({"id": 1}));
        let store = Arc::new(MemoryStore::new());
        store.set(keys::TOKEN, "jwt").unwrap();
        let (client, _) = client_with(transport.clone(), store);

        let _: serde_json::Value = client.get("/auth/profile").await.unwrap();
        assert_eq!(transport.last_request().unwrap().bearer.as_deref(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_anonymous_request_has_no_bearer() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(Method::Get, "/professions", 200, json!([]));
        let (client, _) = client_with(transport.clone(), Arc::new(MemoryStore::new()));

        let _: Vec<serde_json::Value> = client.get("/professions").await.unwrap();
        assert_eq!(transport.last_request().unwrap().bearer, None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects_once() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(Method::Get, "/requests", 401, json!({"message": "Unauthorized"}));
        let store = Arc::new(MemoryStore::new());
        store.set(keys::TOKEN, "expired").unwrap();
        store.set(keys::USER, r#"{"id":1,"name":"a","role":"client"}"#).unwrap();
        let (client, redirect) = client_with(transport.clone(), store.clone());

        let err = client.get::<serde_json::Value>("/requests").await.unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(store.get(keys::TOKEN).unwrap(), None);
        assert_eq!(store.get(keys::USER).unwrap(), None);
        assert!(!client.session().is_authenticated());
        assert_eq!(redirect.0.load(Ordering::SeqCst), 1);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_other_errors_keep_session() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(Method::Get, "/workers/9", 404, json!({"message": "العامل غير موجود"}));
        let store = Arc::new(MemoryStore::new());
        store.set(keys::TOKEN, "jwt").unwrap();
        let (client, redirect) = client_with(transport, store.clone());

        let err = client.get::<serde_json::Value>("/workers/9").await.unwrap_err();
        assert!(err.is_not_found_error());
        assert_eq!(messages::error_message(&err), "العامل غير موجود");
        assert_eq!(store.get(keys::TOKEN).unwrap().as_deref(), Some("jwt"));
        assert_eq!(redirect.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_network_failure() {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail(Method::Get, "/workers");
        let (client, _) = client_with(transport, Arc::new(MemoryStore::new()));

        let err = client.get::<serde_json::Value>("/workers").await.unwrap_err();
        assert!(err.is_network_error());
        assert_eq!(messages::error_message(&err), messages::MSG_NETWORK);
    }

    #[tokio::test]
    async fn test_empty_success_body_decodes_as_unit() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond_raw(Method::Delete, "/reviews/3", 200, "");
        let (client, _) = client_with(transport, Arc::new(MemoryStore::new()));

        client.delete::<()>("/reviews/3").await.unwrap();
    }

    #[test]
    fn test_asset_url() {
        let session = Arc::new(SessionStore::hydrate(Arc::new(MemoryStore::new())));
        let client = ApiClient::new(
            Arc::new(RecordingTransport::new()),
            session,
            "http://localhost:3000",
        );
        assert_eq!(
            client.asset_url(Some("/uploads/a.jpg")).as_deref(),
            Some("http://localhost:3000/uploads/a.jpg")
        );
        assert_eq!(
            client.asset_url(Some("https://cdn.example.com/a.jpg")).as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(client.asset_url(Some("")), None);
        assert_eq!(client.asset_url(None), None);
    }
}
