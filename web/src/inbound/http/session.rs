//! Session helpers to keep HTTP handlers free of cookie plumbing.
//!
//! Extracts the raw `Cookie` header and the auth service's session cookie into
//! a domain [`RequestContext`].

use actix_web::http::header::COOKIE;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{RequestContext, SESSION_COOKIE, SessionToken};

/// Newtype wrapper exposing the per-request session inputs.
#[derive(Debug, Clone, Default)]
pub struct SessionContext(RequestContext);

impl SessionContext {
    /// Build the context for `req`.
    pub fn from_http(req: &HttpRequest) -> Self {
        let cookie_header = req
            .headers()
            .get_all(COOKIE)
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        let cookie_header = (!cookie_header.is_empty()).then_some(cookie_header);
        let session_token = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| SessionToken::new(cookie.value()));
        Self(RequestContext::new(cookie_header, session_token))
    }

    /// Borrow the domain context.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http(req)))
    }
}
