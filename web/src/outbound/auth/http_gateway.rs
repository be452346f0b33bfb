//! Reqwest-backed auth service adapter.
//!
//! Implements both auth ports against one deployment: session lookup through
//! the session endpoint, and the verbatim relay used by `/auth/*`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, Method, Url, redirect};
use tracing::debug;

use crate::domain::ports::{
    AuthProtocolHandler, AuthRequest, AuthResponse, AuthServiceError, SessionResolver,
    is_end_to_end_header,
};
use crate::domain::{RequestContext, Session};

const SESSION_PATH: &str = "/auth/session";

/// Auth service adapter.
///
/// Redirects are never followed: sign-in and callback responses carry
/// `Location` headers meant for the browser.
pub struct AuthHttpGateway {
    client: Client,
    base_url: String,
}

impl AuthHttpGateway {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }
}

#[async_trait]
impl SessionResolver for AuthHttpGateway {
    async fn resolve_session(
        &self,
        context: &RequestContext,
    ) -> Result<Option<Session>, AuthServiceError> {
        let Some(cookies) = context.cookie_header() else {
            return Ok(None);
        };

        let response = self
            .client
            .get(self.endpoint(SESSION_PATH))
            .header(COOKIE, cookies)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(AuthServiceError::unexpected_status(status.as_u16()));
        }
        parse_session(&body)
    }
}

#[async_trait]
impl AuthProtocolHandler for AuthHttpGateway {
    async fn handle(&self, request: AuthRequest) -> Result<AuthResponse, AuthServiceError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|error| AuthServiceError::transport(error.to_string()))?;
        let mut outbound = self
            .client
            .request(method, self.endpoint(&request.path_and_query));
        for (name, value) in request
            .headers
            .iter()
            .filter(|(name, _)| is_end_to_end_header(name))
        {
            outbound = outbound.header(name.as_str(), value.as_str());
        }

        let response = outbound
            .body(request.body)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter(|(name, _)| is_end_to_end_header(name.as_str()))
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status, path = %request.path_and_query, "relayed auth request");

        Ok(AuthResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

/// Decode the session endpoint body; `null` and user-less documents mean
/// nobody is signed in.
fn parse_session(body: &[u8]) -> Result<Option<Session>, AuthServiceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let session: Option<Session> = serde_json::from_slice(body).map_err(|error| {
        AuthServiceError::decode(format!("invalid session JSON payload: {error}"))
    })?;
    Ok(session.filter(|session| session.user().is_some()))
}

fn map_transport_error(error: reqwest::Error) -> AuthServiceError {
    AuthServiceError::transport(error.to_string())
}
