//! Client configuration.
//!
//! Resolution order: built-in defaults, then `config.toml` in the config
//! directory (if present), then the `HERFA_API_BASE_URL` environment variable.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use herfa_core::error::{HerfaError, Result};

use crate::paths::HerfaPaths;

pub const ENV_BASE_URL: &str = "HERFA_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_CACHE_TTL_MINUTES: u64 = 60;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub base_url: String,
    /// Keep cookies across requests.
    pub with_credentials: bool,
    /// Lifetime of cached reference data.
    pub cache_ttl_minutes: u64,
    /// Interval of the request-status poller.
    pub poll_interval_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            with_credentials: true,
            cache_ttl_minutes: DEFAULT_CACHE_TTL_MINUTES,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads the configuration from the platform config directory and the
    /// environment.
    pub fn load(paths: &HerfaPaths) -> Result<Self> {
        let config = Self::from_file(&paths.config_file()?)?;
        Ok(config.with_base_url_override(std::env::var(ENV_BASE_URL).ok()))
    }

    /// Reads `path`; a missing or empty file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&content)?;
        if config.poll_interval_secs == 0 {
            return Err(HerfaError::config(format!(
                "poll_interval_secs must be at least 1 in {}",
                path.display()
            )));
        }
        tracing::debug!("Loaded client config from {}", path.display());
        Ok(config)
    }

    /// Applies a base URL override; blank values are ignored.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes.saturating_mul(60))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ClientConfig::from_file(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://api.herfa.iq/\"\npoll_interval_secs = 5\n")
            .unwrap();

        let config = ClientConfig::from_file(&path)
            .unwrap()
            .with_base_url_override(None);
        assert_eq!(config.base_url, "https://api.herfa.iq");
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.cache_ttl_minutes, DEFAULT_CACHE_TTL_MINUTES);
        assert!(config.with_credentials);
    }

    #[test]
    fn test_env_override_wins() {
        let config = ClientConfig::default()
            .with_base_url_override(Some("http://10.0.0.2:3000".to_string()));
        assert_eq!(config.base_url, "http://10.0.0.2:3000");
        assert_eq!(config.url("/workers"), "http://10.0.0.2:3000/workers");

        let config = ClientConfig::default().with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_zero_poll_interval_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "poll_interval_secs = 0\n").unwrap();

        let err = ClientConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, HerfaError::Config(_)));
    }

    #[test]
    fn test_huge_cache_ttl_saturates() {
        let config = ClientConfig {
            cache_ttl_minutes: u64::MAX,
            ..ClientConfig::default()
        };
        assert_eq!(config.cache_ttl(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [").unwrap();
        assert!(ClientConfig::from_file(&path).is_err());
    }
}
