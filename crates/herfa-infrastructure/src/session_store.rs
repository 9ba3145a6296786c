//! The persisted session holder.
//!
//! One `SessionStore` exists per client. Readers take snapshots; only the
//! auth flow and the HTTP client's 401 handling write to it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use herfa_core::error::Result;
use herfa_core::models::{Role, User};
use herfa_core::session::{AuthState, Session};
use herfa_core::storage::{LocalStore, keys};

pub struct SessionStore {
    store: Arc<dyn LocalStore>,
    session: RwLock<Session>,
    authenticating: AtomicBool,
}

impl SessionStore {
    /// Hydrates the session from `store`.
    ///
    /// A stored user that no longer parses is ignored; the token is kept.
    pub fn hydrate(store: Arc<dyn LocalStore>) -> Self {
        let token = store.get(keys::TOKEN).unwrap_or_else(|e| {
            tracing::warn!("Failed to read stored token: {}", e);
            None
        });
        let user = store
            .get(keys::USER)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read stored user: {}", e);
                None
            })
            .and_then(|raw| match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Ignoring unparsable stored user: {}", e);
                    None
                }
            });

        if token.is_some() {
            tracing::debug!("Restored session for user {:?}", user.as_ref().map(|u| u.id));
        }

        Self {
            store,
            session: RwLock::new(Session { token, user }),
            authenticating: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has_role(role)
    }

    pub fn state(&self) -> AuthState {
        if self.authenticating.load(Ordering::SeqCst) {
            AuthState::Authenticating
        } else {
            self.snapshot().state()
        }
    }

    /// Marks a login/registration as in flight. The stored session is left
    /// as is, so a failure falls back to the prior state.
    pub fn begin_authentication(&self) {
        self.authenticating.store(true, Ordering::SeqCst);
    }

    pub fn end_authentication(&self) {
        self.authenticating.store(false, Ordering::SeqCst);
    }

    /// Persists a fresh token and user.
    pub fn save(&self, token: &str, user: Option<User>) -> Result<()> {
        self.store.set(keys::TOKEN, token)?;
        match &user {
            Some(user) => self.store.set(keys::USER, &serde_json::to_string(user)?)?,
            None => self.store.remove(keys::USER)?,
        }
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        *session = Session::new(token, user);
        Ok(())
    }

    /// Replaces the cached user, keeping the token.
    pub fn set_user(&self, user: User) -> Result<()> {
        self.store.set(keys::USER, &serde_json::to_string(&user)?)?;
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        session.user = Some(user);
        Ok(())
    }

    /// Forgets the session. The in-memory state is cleared even when the
    /// backing store fails.
    pub fn clear(&self) -> Result<()> {
        {
            let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
            *session = Session::default();
        }
        let token = self.store.remove(keys::TOKEN);
        let user = self.store.remove(keys::USER);
        token.and(user)
    }
}
