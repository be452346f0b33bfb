//! HTTP inbound adapter exposing the site's routes.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod install;
pub mod negotiation;
pub mod session;
pub mod state;

pub use error::ApiResult;
