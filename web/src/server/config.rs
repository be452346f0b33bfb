//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

/// Validated configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_base_url: Url,
    pub(crate) auth_base_url: Url,
    pub(crate) request_timeout: Duration,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        api_base_url: Url,
        auth_base_url: Url,
        request_timeout: Duration,
    ) -> Self {
        Self {
            bind_addr,
            api_base_url,
            auth_base_url,
            request_timeout,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Registry API base URL.
    #[must_use]
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Auth service base URL.
    #[must_use]
    pub fn auth_base_url(&self) -> &Url {
        &self.auth_base_url
    }

    /// Timeout applied to every outbound request.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
