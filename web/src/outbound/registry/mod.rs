//! Registry API outbound adapter.
//!
//! A thin HTTP implementation of the `RegistryApi` port.

mod dto;
mod http_client;

pub use http_client::RegistryHttpClient;
