//! Application layer for the Herfa client.
//!
//! One service per backend resource, all sharing a single [`ApiClient`]
//! (and through it a single session). [`Herfa`] builds and owns them.
//!
//! [`ApiClient`]: herfa_infrastructure::ApiClient

pub mod auth_service;
pub mod favorite_service;
pub mod herfa;
pub mod neighborhood_service;
pub mod poller;
pub mod portfolio_service;
pub mod profession_service;
pub mod request_service;
pub mod review_service;
pub mod user_service;
pub mod worker_service;

pub use auth_service::AuthService;
pub use favorite_service::FavoriteService;
pub use herfa::{Herfa, HerfaBuilder};
pub use neighborhood_service::NeighborhoodService;
pub use poller::PollHandle;
pub use portfolio_service::PortfolioService;
pub use profession_service::ProfessionService;
pub use request_service::{RequestService, RequestUpdate};
pub use review_service::ReviewService;
pub use user_service::UserService;
pub use worker_service::WorkerService;
