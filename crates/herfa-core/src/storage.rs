//! Local key/value persistence used for the session and the reference cache.

use crate::error::Result;

/// Keys of the persisted client state.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
    pub const PROFESSIONS_CACHE: &str = "professions_cache";
    pub const NEIGHBORHOODS_CACHE: &str = "neighborhoods_cache";
}

/// A string key/value store, the client-side equivalent of browser local
/// storage. Values are opaque strings (JSON for structured data).
///
/// Implementations must be safe to share across tasks.
pub trait LocalStore: Send + Sync {
    /// Reads a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
