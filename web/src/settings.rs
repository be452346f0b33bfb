//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BARFORGE_*` environment variables and config
//! files. Unset values fall back to local development defaults.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::server::ServerConfig;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Invalid configuration detected at start-up.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A base URL did not parse.
    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl {
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// A base URL used a scheme other than http or https.
    #[error("{field} must use http or https: {value}")]
    UnsupportedScheme {
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: String,
    },
    /// The listener address did not parse.
    #[error("bind_addr is not a socket address: {value}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
        /// Parser error.
        #[source]
        source: std::net::AddrParseError,
    },
    /// A zero timeout would fail every outbound call.
    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Raw settings for the web front end.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BARFORGE")]
pub struct AppSettings {
    /// Registry API base URL.
    pub api_base_url: Option<String>,
    /// Auth service base URL.
    pub auth_base_url: Option<String>,
    /// Listener address.
    pub bind_addr: Option<String>,
    /// Outbound request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Registry API base URL, or the local default.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Auth service base URL, or the local default.
    #[must_use]
    pub fn auth_base_url(&self) -> &str {
        self.auth_base_url.as_deref().unwrap_or(DEFAULT_AUTH_BASE_URL)
    }

    /// Listener address, or `0.0.0.0:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Outbound timeout in seconds, or 10.
    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Validate the settings into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed URLs or addresses and a zero
    /// timeout.
    pub fn server_config(&self) -> Result<ServerConfig, ConfigError> {
        let bind_addr: SocketAddr =
            self.bind_addr()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    value: self.bind_addr().to_owned(),
                    source,
                })?;
        let timeout = match self.request_timeout_secs() {
            0 => return Err(ConfigError::ZeroTimeout),
            secs => Duration::from_secs(secs),
        };
        Ok(ServerConfig::new(
            bind_addr,
            parse_base_url("api_base_url", self.api_base_url())?,
            parse_base_url("auth_base_url", self.auth_base_url())?,
            timeout,
        ))
    }
}

fn parse_base_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_owned(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            field,
            value: value.to_owned(),
        });
    }
    Ok(url)
}
