//! Unified path management for herfa configuration and local state.
//!
//! ```text
//! ~/.config/herfa/          # Config directory
//! └── config.toml           # Client configuration (optional)
//!
//! ~/.local/share/herfa/     # Data directory
//! └── store/                # One JSON file per persisted key
//!     ├── token.json
//!     ├── user.json
//!     ├── professions_cache.json
//!     └── neighborhoods_cache.json
//! ```

use std::path::{Path, PathBuf};

use herfa_core::error::{HerfaError, Result};

const APP_DIR: &str = "herfa";

/// Resolves herfa paths, optionally rooted under a custom base directory.
///
/// With a base directory (tests, portable installs) both the config and the
/// data directory live directly under it.
#[derive(Debug, Clone, Default)]
pub struct HerfaPaths {
    base: Option<PathBuf>,
}

impl HerfaPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or_else(|| HerfaError::config("Cannot find config directory")),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or_else(|| HerfaError::config("Cannot find data directory")),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory of the file-backed local store.
    pub fn store_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("store"))
    }
}
