//! Login, registration, profile and logout (`/auth/*`).

use std::sync::Arc;

use serde::de::IgnoredAny;

use herfa_core::error::{HerfaError, Result};
use herfa_core::models::{AuthResponse, ChangePassword, Credentials, RegisterRequest, Role, User};
use herfa_core::session::AuthState;
use herfa_infrastructure::http::{ApiRequest, Method};
use herfa_infrastructure::{ApiClient, SessionStore};

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn session(&self) -> &Arc<SessionStore> {
        self.client.session()
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.authenticate("/auth/register", request).await
    }

    /// Logs in with a phone number or an email (anything containing `@`).
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse> {
        let credentials = Credentials::from_identifier(identifier, password);
        self.login_with(&credentials).await
    }

    pub async fn login_with(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.authenticate("/auth/login", credentials).await
    }

    /// Posts to an auth endpoint and stores the session when the response
    /// carries an access token. A failure leaves the prior session untouched.
    async fn authenticate<B>(&self, path: &str, body: &B) -> Result<AuthResponse>
    where
        B: serde::Serialize + ?Sized,
    {
        self.session().begin_authentication();
        let result = self.client.post::<AuthResponse, _>(path, body).await;
        self.session().end_authentication();

        let response = result?;
        if let Some(token) = &response.access_token {
            self.session().save(token, response.user.clone())?;
            tracing::info!(
                "Signed in as user {:?}",
                response.user.as_ref().map(|u| u.id)
            );
        }
        Ok(response)
    }

    /// Tells the backend and forgets the local session. The session is
    /// cleared even when the request fails.
    pub async fn logout(&self) -> Result<()> {
        let request = ApiRequest::new(Method::Post, "/auth/logout");
        if let Err(e) = self.client.send::<IgnoredAny>(request).await {
            tracing::warn!("Logout request failed: {}", e);
        }
        self.session().clear()
    }

    /// Refetches the profile and overwrites the stored user.
    pub async fn profile(&self) -> Result<User> {
        if !self.is_authenticated() {
            return Err(HerfaError::NotAuthenticated);
        }
        let user: User = self.client.get("/auth/profile").await?;
        self.session().set_user(user.clone())?;
        Ok(user)
    }

    pub async fn change_password(&self, request: &ChangePassword) -> Result<serde_json::Value> {
        self.client.patch("/auth/change-password", request).await
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().user()
    }

    pub fn token(&self) -> Option<String> {
        self.session().token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.session().has_role(role)
    }

    pub fn state(&self) -> AuthState {
        self.session().state()
    }
}
