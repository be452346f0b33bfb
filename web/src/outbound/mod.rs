//! Outbound adapters implementing domain ports for external services.
//!
//! - **registry**: reqwest client for the registry API (profiles, modules).
//! - **auth**: reqwest client for the auth service (session lookup and the
//!   `/auth/*` protocol relay).
//!
//! Adapters translate between wire formats and domain types. They contain no
//! page logic.

pub mod auth;
pub mod registry;
