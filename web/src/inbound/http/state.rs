//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::DashboardService;
use crate::domain::ports::AuthProtocolHandler;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Page load and form action use-cases.
    pub dashboard: Arc<DashboardService>,
    /// Relay for `/auth/*` requests.
    pub auth: Arc<dyn AuthProtocolHandler>,
}

impl HttpState {
    /// Construct state from the dashboard use-case and the auth relay port.
    pub fn new(dashboard: Arc<DashboardService>, auth: Arc<dyn AuthProtocolHandler>) -> Self {
        Self { dashboard, auth }
    }
}
