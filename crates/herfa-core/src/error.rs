//! Error types for the Herfa client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `message` field of a backend error body.
///
/// Validation failures (400) carry an array of messages, every other failure
/// carries a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Single(String),
    Many(Vec<String>),
}

impl ServerMessage {
    /// Joins the message(s) into one displayable string.
    pub fn joined(&self) -> String {
        match self {
            Self::Single(message) => message.clone(),
            Self::Many(messages) => messages.join("\n"),
        }
    }
}

/// JSON body returned by the backend alongside an error status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<ServerMessage>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Parses an error body, falling back to an empty body for non-JSON payloads.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

/// Coarse classification of an HTTP error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Server,
    Other,
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            500 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// A shared error type for the whole client.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HerfaError {
    /// The request was sent but no response arrived (DNS, refused, reset, ...).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", .body.message.as_ref().map(ServerMessage::joined).unwrap_or_default())]
    Api { status: u16, body: ApiErrorBody },

    /// An operation that requires a logged-in session was called anonymously.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// IO error (local store)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HerfaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn api(status: u16, body: ApiErrorBody) -> Self {
        Self::Api { status, body }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// HTTP status of the response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn status_class(&self) -> Option<StatusClass> {
        self.status().map(StatusClass::from_status)
    }

    /// 401 from the server.
    pub fn is_auth_error(&self) -> bool {
        self.status() == Some(401)
    }

    /// 403 from the server.
    pub fn is_forbidden_error(&self) -> bool {
        self.status() == Some(403)
    }

    /// 404 from the server.
    pub fn is_not_found_error(&self) -> bool {
        self.status() == Some(404)
    }

    /// 400 from the server.
    pub fn is_validation_error(&self) -> bool {
        self.status() == Some(400)
    }

    /// No response was received.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HerfaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HerfaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HerfaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HerfaError>`.
pub type Result<T> = std::result::Result<T, HerfaError>;
