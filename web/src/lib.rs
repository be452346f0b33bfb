//! Barforge web front end: server-rendered dashboard, auth relay and helpers.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod render;
pub mod server;
pub mod settings;

pub use middleware::Trace;
