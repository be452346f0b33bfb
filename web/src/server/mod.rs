//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::Trace;
use crate::domain::DashboardService;
use crate::inbound::http::auth;
use crate::inbound::http::dashboard::{dashboard_action, dashboard_page};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::install::install;
use crate::inbound::http::state::HttpState;
use crate::outbound::auth::AuthHttpGateway;
use crate::outbound::registry::RegistryHttpClient;

/// Shared per-worker dependencies.
#[derive(Clone)]
pub struct AppDependencies {
    /// Liveness and readiness flags.
    pub health_state: web::Data<HealthState>,
    /// Handler state holding the wired ports.
    pub http_state: web::Data<HttpState>,
}

/// Build the application with every route and middleware attached.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(dashboard_page)
        .service(dashboard_action)
        .configure(auth::configure)
        .service(install)
        .service(ready)
        .service(live)
}

/// Wire the reqwest adapters into handler state.
///
/// # Errors
///
/// Returns an error when a reqwest client cannot be constructed.
pub fn build_http_state(config: &ServerConfig) -> Result<web::Data<HttpState>, reqwest::Error> {
    let auth = Arc::new(AuthHttpGateway::new(
        config.auth_base_url(),
        config.request_timeout(),
    )?);
    let registry = Arc::new(RegistryHttpClient::new(
        config.api_base_url(),
        config.request_timeout(),
    )?);
    let dashboard = Arc::new(DashboardService::new(auth.clone(), registry));
    Ok(web::Data::new(HttpState::new(dashboard, auth)))
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when building clients, binding the socket or
/// starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config)
        .map_err(|error| std::io::Error::other(format!("HTTP client setup failed: {error}")))?;
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(config.bind_addr())?
        .run();

    info!(
        bind_addr = %config.bind_addr(),
        api_base_url = %config.api_base_url(),
        auth_base_url = %config.auth_base_url(),
        "barforge web listening"
    );
    health_state.mark_ready();
    Ok(server)
}
