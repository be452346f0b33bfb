//! Reqwest-backed registry API adapter.
//!
//! This adapter owns transport details only: endpoint paths, the session
//! cookie, timeout and HTTP error mapping, and JSON decoding into domain
//! records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::ModulesEnvelopeDto;
use crate::domain::ports::{RegistryApi, RegistryApiError};
use crate::domain::{Module, ProfileUpdate, SessionToken, UserProfile};

const PROFILE_PATH: &str = "/api/v1/users/me";
const MODULES_PATH: &str = "/api/v1/modules/mine";

/// Registry adapter that calls one API deployment on behalf of the user.
pub struct RegistryHttpClient {
    client: Client,
    base_url: String,
}

impl RegistryHttpClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// Endpoint paths are appended to `base_url` verbatim, so a base with a
    /// path prefix keeps that prefix.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorised(&self, request: RequestBuilder, token: &SessionToken) -> RequestBuilder {
        request
            .header(COOKIE, token.cookie_header())
            .header(ACCEPT, "application/json")
    }

    async fn send(request: RequestBuilder) -> Result<Vec<u8>, RegistryApiError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl RegistryApi for RegistryHttpClient {
    async fn fetch_profile(&self, token: &SessionToken) -> Result<UserProfile, RegistryApiError> {
        let request = self.authorised(self.client.get(self.endpoint(PROFILE_PATH)), token);
        let body = Self::send(request).await?;
        decode(&body, "profile")
    }

    async fn fetch_modules(&self, token: &SessionToken) -> Result<Vec<Module>, RegistryApiError> {
        let request = self.authorised(self.client.get(self.endpoint(MODULES_PATH)), token);
        let body = Self::send(request).await?;
        let envelope: ModulesEnvelopeDto = decode(&body, "module list")?;
        Ok(envelope.into_modules())
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<(), RegistryApiError> {
        let request = self
            .authorised(self.client.patch(self.endpoint(PROFILE_PATH)), token)
            .json(update);
        Self::send(request).await?;
        debug!("profile update accepted by registry");
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T, RegistryApiError> {
    serde_json::from_slice(body)
        .map_err(|error| RegistryApiError::decode(format!("invalid {what} JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> RegistryApiError {
    RegistryApiError::transport(error.to_string())
}

fn map_status_error(status: StatusCode) -> RegistryApiError {
    RegistryApiError::unexpected_status(status.as_u16())
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://api.local", "http://api.local/api/v1/users/me")]
    #[case("http://api.local/", "http://api.local/api/v1/users/me")]
    #[case("http://api.local/registry/", "http://api.local/registry/api/v1/users/me")]
    fn endpoints_append_to_the_base_path(#[case] base: &str, #[case] expected: &str) {
        let base = Url::parse(base).expect("base url");
        let client = RegistryHttpClient::new(&base, Duration::from_secs(1)).expect("client");
        assert_eq!(client.endpoint(PROFILE_PATH), expected);
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, 401)]
    #[case(StatusCode::NOT_FOUND, 404)]
    #[case(StatusCode::SERVICE_UNAVAILABLE, 503)]
    fn statuses_are_reported_verbatim(#[case] status: StatusCode, #[case] expected: u16) {
        assert_eq!(map_status_error(status).status(), Some(expected));
    }

    #[rstest]
    fn malformed_profiles_are_decode_errors() {
        let error = decode::<UserProfile>(b"{\"id\":", "profile").expect_err("decode");
        assert!(matches!(error, RegistryApiError::Decode { .. }));
        assert!(error.to_string().contains("invalid profile JSON payload"));
    }
}
