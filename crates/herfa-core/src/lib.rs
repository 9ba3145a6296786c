//! Domain layer of the Herfa client: records, errors and pure helpers.
//!
//! Nothing in this crate performs I/O. Persistence and HTTP live in
//! `herfa-infrastructure`; the services that combine them live in
//! `herfa-application`.

pub mod clock;
pub mod error;
pub mod format;
pub mod latest;
pub mod messages;
pub mod models;
pub mod session;
pub mod storage;
pub mod upload;
pub mod validate;

pub use error::{HerfaError, Result};
