//! Records mirrored from the backend, plus the pure helpers that operate on
//! already-fetched slices of them.
//!
//! Every record deserializes leniently: missing optional fields default so a
//! partial row from the server still loads.

mod common;
pub mod favorite;
pub mod neighborhood;
mod page;
pub mod portfolio;
pub mod profession;
pub mod request;
pub mod review;
pub mod user;
pub mod worker;

pub use common::{Id, SortOrder};
pub use favorite::{Favorite, ToggleOutcome};
pub use neighborhood::{Area, Neighborhood, NeighborhoodInput};
pub use page::{PageMeta, Paginated};
pub use portfolio::{PortfolioInput, PortfolioItem};
pub use profession::{Profession, ProfessionInput};
pub use request::{CreateServiceRequest, RequestStatus, ServiceRequest, StatusUpdate};
pub use review::{Review, ReviewInput};
pub use user::{
    AuthResponse, ChangePassword, Credentials, RegisterRequest, Role, User, UserInput,
    UserStatistics,
};
pub use worker::{Worker, WorkerInput, WorkerSearchParams, WorkerSort};
