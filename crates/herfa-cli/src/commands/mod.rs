pub mod auth;
pub mod portfolio;
pub mod reference;
pub mod requests;
pub mod workers;
