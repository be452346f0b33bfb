//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_service;
mod registry_api;

#[cfg(test)]
pub use auth_service::{MockAuthProtocolHandler, MockSessionResolver};
pub use auth_service::{
    AuthProtocolHandler, AuthRequest, AuthResponse, AuthServiceError, SessionResolver,
    is_end_to_end_header,
};
#[cfg(test)]
pub use registry_api::MockRegistryApi;
pub use registry_api::{RegistryApi, RegistryApiError};
