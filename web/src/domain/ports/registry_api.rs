//! Driven port for the registry API that owns profiles and modules.
//!
//! Every call is made on behalf of the signed-in user and presents the
//! session token as a cookie.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Module, ProfileUpdate, SessionToken, UserProfile};

define_port_error! {
    /// Errors surfaced while calling the registry API.
    pub enum RegistryApiError {
        /// The API answered with a non-success status.
        UnexpectedStatus { status: u16 } =>
            "registry API returned status {status}",
        /// The request did not complete.
        Transport { message: String } =>
            "registry API transport failed: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "registry API response decode failed: {message}",
    }
}

impl RegistryApiError {
    /// Status code reported by the API, if the request reached it.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Port for the registry's user and module endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// `GET /api/v1/users/me`.
    async fn fetch_profile(&self, token: &SessionToken) -> Result<UserProfile, RegistryApiError>;

    /// `GET /api/v1/modules/mine`.
    async fn fetch_modules(&self, token: &SessionToken) -> Result<Vec<Module>, RegistryApiError>;

    /// `PATCH /api/v1/users/me` with a partial update.
    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<(), RegistryApiError>;
}
