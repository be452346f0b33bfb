//! Driven ports for the external authentication service.
//!
//! The auth service owns sign-in, OAuth callbacks and the session store. This
//! application only asks it who a request belongs to and relays protocol
//! traffic under `/auth/*` to it unchanged.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{RequestContext, Session};

define_port_error! {
    /// Errors surfaced while talking to the auth service.
    pub enum AuthServiceError {
        /// The request did not complete.
        Transport { message: String } =>
            "auth service transport failed: {message}",
        /// The auth service answered with a non-success status.
        UnexpectedStatus { status: u16 } =>
            "auth service returned status {status}",
        /// The session document could not be decoded.
        Decode { message: String } =>
            "auth service response decode failed: {message}",
    }
}

/// Port resolving the session attached to a request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Return the session for `context`, or `None` for anonymous visitors.
    async fn resolve_session(
        &self,
        context: &RequestContext,
    ) -> Result<Option<Session>, AuthServiceError>;
}

/// Connection-scoped headers that a relay must not copy between hops.
const HOP_BY_HOP_HEADERS: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

/// Return whether a header should travel through the auth relay.
///
/// # Examples
/// ```
/// use barforge_web::domain::ports::is_end_to_end_header;
///
/// assert!(is_end_to_end_header("Set-Cookie"));
/// assert!(!is_end_to_end_header("Transfer-Encoding"));
/// ```
#[must_use]
pub fn is_end_to_end_header(name: &str) -> bool {
    !HOP_BY_HOP_HEADERS
        .iter()
        .any(|hop| hop.eq_ignore_ascii_case(name))
}

/// Auth protocol request relayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    /// HTTP method name.
    pub method: String,
    /// Path and query, starting with `/auth/`.
    pub path_and_query: String,
    /// End-to-end request headers.
    pub headers: Vec<(String, String)>,
    /// Raw request body.
    pub body: Vec<u8>,
}

/// Auth service response relayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// HTTP status code.
    pub status: u16,
    /// End-to-end response headers, repeated names preserved.
    pub headers: Vec<(String, String)>,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Port handling auth protocol requests (sign-in, callbacks, sign-out, CSRF).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProtocolHandler: Send + Sync {
    /// Relay `request` and return the auth service's response.
    async fn handle(&self, request: AuthRequest) -> Result<AuthResponse, AuthServiceError>;
}
