//! Session values obtained from the external auth service.
//!
//! The web tier never issues sessions. It reads the auth service's session
//! cookie from the inbound request, asks the service who the cookie belongs to
//! and forwards the same cookie to the registry API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the auth service's session token.
pub const SESSION_COOKIE: &str = "authjs.session-token";

/// Opaque session credential.
///
/// `Debug` is redacted so the token never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw cookie value. Empty values are not credentials.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        (!raw.is_empty()).then_some(Self(raw))
    }

    /// Raw token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// `Cookie` header value presenting this token to the registry API.
    ///
    /// # Examples
    /// ```
    /// use barforge_web::domain::SessionToken;
    ///
    /// let token = SessionToken::new("abc").expect("non-empty");
    /// assert_eq!(token.cookie_header(), "authjs.session-token=abc");
    /// ```
    #[must_use]
    pub fn cookie_header(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Identity attached to an authenticated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Name reported by the identity provider.
    #[serde(default)]
    pub name: Option<String>,
    /// Email reported by the identity provider.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar reported by the identity provider.
    #[serde(default)]
    pub image: Option<String>,
    /// GitHub login.
    #[serde(default)]
    pub login: Option<String>,
}

/// Session document returned by the auth service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in user, absent for anonymous sessions.
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Expiry timestamp as reported by the auth service.
    #[serde(default)]
    pub expires: Option<String>,
}

impl Session {
    /// Signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}

/// Per-request inputs passed explicitly to loaders and actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    cookie_header: Option<String>,
    session_token: Option<SessionToken>,
}

impl RequestContext {
    /// Build a context from the inbound `Cookie` header and the session
    /// cookie value.
    #[must_use]
    pub fn new(cookie_header: Option<String>, session_token: Option<SessionToken>) -> Self {
        Self {
            cookie_header,
            session_token,
        }
    }

    /// Raw inbound `Cookie` header, forwarded to the auth service.
    #[must_use]
    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie_header.as_deref()
    }

    /// Session credential, if the browser sent one.
    #[must_use]
    pub fn session_token(&self) -> Option<&SessionToken> {
        self.session_token.as_ref()
    }
}
