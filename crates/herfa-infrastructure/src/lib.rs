//! Infrastructure for the Herfa client: configuration, local persistence,
//! the HTTP pipeline and the reference-data cache.

pub mod config;
pub mod http;
pub mod paths;
pub mod reference_cache;
pub mod session_store;
pub mod storage;
pub mod testing;
pub mod upload;

pub use crate::config::ClientConfig;
pub use crate::http::{ApiClient, HttpTransport, ReqwestTransport, UnauthorizedHandler};
pub use crate::paths::HerfaPaths;
pub use crate::reference_cache::ReferenceCache;
pub use crate::session_store::SessionStore;
pub use crate::storage::{JsonFileStore, MemoryStore};
