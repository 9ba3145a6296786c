//! HTTP plumbing: the transport seam and the API client built on it.

mod client;
mod transport;

pub use client::{ApiClient, LoggingRedirect, UnauthorizedHandler};
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport, RequestBody, query_pairs,
};
