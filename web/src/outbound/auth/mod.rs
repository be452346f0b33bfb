//! Auth service outbound adapter.
//!
//! One HTTP client implements both `SessionResolver` and
//! `AuthProtocolHandler`.

mod http_gateway;

pub use http_gateway::AuthHttpGateway;
