//! Recording test doubles for the driven ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use barforge_web::domain::ports::{
    AuthProtocolHandler, AuthRequest, AuthResponse, AuthServiceError, RegistryApi,
    RegistryApiError, SessionResolver,
};
use barforge_web::domain::{
    Module, ProfileUpdate, RequestContext, Session, SessionToken, UserProfile,
};

#[derive(Clone)]
pub struct RecordingSessionResolver {
    calls: Arc<Mutex<Vec<Option<String>>>>,
    response: Arc<Mutex<Result<Option<Session>, AuthServiceError>>>,
}

impl RecordingSessionResolver {
    pub fn anonymous() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(Ok(None))),
        }
    }

    pub fn set_session(&self, session: Option<Session>) {
        *self.response.lock().expect("session response lock") = Ok(session);
    }

    pub fn set_error(&self, error: AuthServiceError) {
        *self.response.lock().expect("session response lock") = Err(error);
    }

    /// Cookie headers seen by each lookup.
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().expect("session calls lock").clone()
    }
}

#[async_trait]
impl SessionResolver for RecordingSessionResolver {
    async fn resolve_session(
        &self,
        context: &RequestContext,
    ) -> Result<Option<Session>, AuthServiceError> {
        self.calls
            .lock()
            .expect("session calls lock")
            .push(context.cookie_header().map(str::to_owned));
        self.response.lock().expect("session response lock").clone()
    }
}

/// One recorded registry call.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryCall {
    FetchProfile { token: String },
    FetchModules { token: String },
    UpdateProfile { token: String, update: ProfileUpdate },
}

#[derive(Clone)]
pub struct RecordingRegistryApi {
    calls: Arc<Mutex<Vec<RegistryCall>>>,
    profile: Arc<Mutex<Result<UserProfile, RegistryApiError>>>,
    modules: Arc<Mutex<Result<Vec<Module>, RegistryApiError>>>,
    update: Arc<Mutex<Result<(), RegistryApiError>>>,
}

impl RecordingRegistryApi {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            profile: Arc::new(Mutex::new(Err(RegistryApiError::unexpected_status(404_u16)))),
            modules: Arc::new(Mutex::new(Ok(Vec::new()))),
            update: Arc::new(Mutex::new(Ok(()))),
        }
    }

    pub fn set_profile(&self, response: Result<UserProfile, RegistryApiError>) {
        *self.profile.lock().expect("profile response lock") = response;
    }

    pub fn set_modules(&self, response: Result<Vec<Module>, RegistryApiError>) {
        *self.modules.lock().expect("modules response lock") = response;
    }

    pub fn set_update(&self, response: Result<(), RegistryApiError>) {
        *self.update.lock().expect("update response lock") = response;
    }

    pub fn calls(&self) -> Vec<RegistryCall> {
        self.calls.lock().expect("registry calls lock").clone()
    }

    fn record(&self, call: RegistryCall) {
        self.calls.lock().expect("registry calls lock").push(call);
    }
}

#[async_trait]
impl RegistryApi for RecordingRegistryApi {
    async fn fetch_profile(&self, token: &SessionToken) -> Result<UserProfile, RegistryApiError> {
        self.record(RegistryCall::FetchProfile {
            token: token.expose().to_owned(),
        });
        self.profile.lock().expect("profile response lock").clone()
    }

    async fn fetch_modules(&self, token: &SessionToken) -> Result<Vec<Module>, RegistryApiError> {
        self.record(RegistryCall::FetchModules {
            token: token.expose().to_owned(),
        });
        self.modules.lock().expect("modules response lock").clone()
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<(), RegistryApiError> {
        self.record(RegistryCall::UpdateProfile {
            token: token.expose().to_owned(),
            update: update.clone(),
        });
        self.update.lock().expect("update response lock").clone()
    }
}

#[derive(Clone)]
pub struct RecordingAuthHandler {
    calls: Arc<Mutex<Vec<AuthRequest>>>,
    response: Arc<Mutex<Result<AuthResponse, AuthServiceError>>>,
}

impl RecordingAuthHandler {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(Ok(AuthResponse {
                status: 200,
                headers: Vec::new(),
                body: Vec::new(),
            }))),
        }
    }

    pub fn set_response(&self, response: Result<AuthResponse, AuthServiceError>) {
        *self.response.lock().expect("auth response lock") = response;
    }

    pub fn calls(&self) -> Vec<AuthRequest> {
        self.calls.lock().expect("auth calls lock").clone()
    }
}

#[async_trait]
impl AuthProtocolHandler for RecordingAuthHandler {
    async fn handle(&self, request: AuthRequest) -> Result<AuthResponse, AuthServiceError> {
        self.calls.lock().expect("auth calls lock").push(request);
        self.response.lock().expect("auth response lock").clone()
    }
}
