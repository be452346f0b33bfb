//! Shared fixtures for HTTP-level tests.

pub mod doubles;

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};
use barforge_web::domain::DashboardService;
use barforge_web::inbound::http::health::HealthState;
use barforge_web::inbound::http::state::HttpState;
use barforge_web::server::{AppDependencies, build_app};
use chrono::{TimeZone, Utc};

use barforge_web::domain::{Module, ModuleVersion, Session, SessionUser, UserProfile};
use doubles::{RecordingAuthHandler, RecordingRegistryApi, RecordingSessionResolver};

/// Doubles behind one app instance, kept for assertions.
pub struct Harness {
    pub sessions: RecordingSessionResolver,
    pub registry: RecordingRegistryApi,
    pub auth: RecordingAuthHandler,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            sessions: RecordingSessionResolver::anonymous(),
            registry: RecordingRegistryApi::new(),
            auth: RecordingAuthHandler::new(),
        }
    }

    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness.sessions.set_session(Some(ada_session()));
        harness.registry.set_profile(Ok(ada_profile()));
        harness.registry.set_modules(Ok(vec![clock_module()]));
        harness
    }

    pub async fn app(
        &self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> + use<> {
        let dashboard = Arc::new(DashboardService::new(
            Arc::new(self.sessions.clone()),
            Arc::new(self.registry.clone()),
        ));
        let http_state = web::Data::new(HttpState::new(dashboard, Arc::new(self.auth.clone())));
        test::init_service(build_app(AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state,
        }))
        .await
    }
}

pub const SESSION_COOKIE_HEADER: &str = "authjs.session-token=tok-ada";

pub fn ada_session() -> Session {
    Session {
        user: Some(SessionUser {
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            image: None,
            login: Some("ada".into()),
        }),
        expires: Some("2030-01-01T00:00:00.000Z".into()),
    }
}

pub fn ada_profile() -> UserProfile {
    UserProfile {
        id: 1,
        username: "ada".into(),
        display_name: Some("Countess of Lovelace".into()),
        avatar_url: Some("https://avatars.example/ada.png".into()),
        bio: Some("Poetical science".into()),
        website_url: Some("https://github.com/ada".into()),
        verified_author: true,
        module_count: 1,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub fn clock_module() -> Module {
    Module {
        uuid: "clock@time".into(),
        name: "Clock".into(),
        author: "ada".into(),
        description: "Shows the time".into(),
        category: "time".into(),
        downloads: 1200,
        rating: Some(4.5),
        version: Some(ModuleVersion {
            major: 2,
            minor: 0,
            patch: 1,
        }),
    }
}
