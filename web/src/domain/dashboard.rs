//! Dashboard use-cases: the session-gated page load and the profile update
//! action.
//!
//! Loading never fails. Anonymous visitors and registry outages both produce
//! an empty dashboard so the page always renders. The update action reports
//! failures as an [`ActionOutcome`] instead of an error.

use std::sync::Arc;

use futures_util::future::join;
use serde::Serialize;
use tracing::{debug, warn};

use super::ports::{RegistryApi, RegistryApiError, SessionResolver};
use super::{
    Module, ProfileForm, ProfileUpdate, RequestContext, Session, SessionToken, UserProfile,
};

/// Message returned when the action is attempted without a session.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Message returned when the registry rejects an update.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update profile";

const UNAUTHORIZED_STATUS: u16 = 401;
const BAD_GATEWAY_STATUS: u16 = 502;

/// Data backing the dashboard page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardData {
    /// Session as reported by the auth service.
    pub session: Option<Session>,
    /// Signed-in user's profile, when the registry returned one.
    pub profile: Option<UserProfile>,
    /// Signed-in user's modules.
    pub modules: Vec<Module>,
}

impl DashboardData {
    fn empty(session: Option<Session>) -> Self {
        Self {
            session,
            profile: None,
            modules: Vec::new(),
        }
    }
}

/// Result of a form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action completed.
    Success,
    /// The action failed with an HTTP-style status and a user-facing message.
    Failure {
        /// Status code to report.
        status: u16,
        /// User-facing message.
        message: String,
    },
}

impl ActionOutcome {
    fn failure(status: u16, message: &str) -> Self {
        Self::Failure {
            status,
            message: message.to_owned(),
        }
    }

    /// Status code to report for this outcome.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::Failure { status, .. } => *status,
        }
    }
}

/// Dashboard service wired to the auth and registry ports.
#[derive(Clone)]
pub struct DashboardService {
    sessions: Arc<dyn SessionResolver>,
    registry: Arc<dyn RegistryApi>,
}

impl DashboardService {
    /// Build the service from its ports.
    pub fn new(sessions: Arc<dyn SessionResolver>, registry: Arc<dyn RegistryApi>) -> Self {
        Self { sessions, registry }
    }

    async fn resolve_session(&self, context: &RequestContext) -> Option<Session> {
        match self.sessions.resolve_session(context).await {
            Ok(session) => session,
            Err(error) => {
                warn!(%error, "session lookup failed; treating request as anonymous");
                None
            }
        }
    }

    /// Load the dashboard for the request in `context`.
    ///
    /// Profile and modules are fetched concurrently. A non-success status from
    /// either call blanks only that part; a transport or decode failure blanks
    /// both.
    pub async fn load(&self, context: &RequestContext) -> DashboardData {
        let session = self.resolve_session(context).await;
        if session.as_ref().and_then(Session::user).is_none() {
            return DashboardData::empty(session);
        }
        let Some(token) = context.session_token() else {
            debug!("session without token cookie; rendering empty dashboard");
            return DashboardData::empty(session);
        };

        let (profile, modules) = join(
            self.registry.fetch_profile(token),
            self.registry.fetch_modules(token),
        )
        .await;

        let profile = tolerate_status(profile.map(Some), "profile");
        let modules = tolerate_status(modules, "modules");
        match (profile, modules) {
            (Ok(profile), Ok(modules)) => DashboardData {
                session,
                profile,
                modules,
            },
            (Err(error), _) | (_, Err(error)) => {
                warn!(%error, "registry unavailable; rendering empty dashboard");
                DashboardData::empty(session)
            }
        }
    }

    /// Check that the request in `context` may run a form action.
    ///
    /// Returns the session token to act with, or the 401 outcome to report.
    /// Callers run this before reading the submitted form.
    pub async fn authorise_action<'a>(
        &self,
        context: &'a RequestContext,
    ) -> Result<&'a SessionToken, ActionOutcome> {
        let session = self.resolve_session(context).await;
        if session.as_ref().and_then(Session::user).is_none() {
            return Err(ActionOutcome::failure(
                UNAUTHORIZED_STATUS,
                UNAUTHORIZED_MESSAGE,
            ));
        }
        context.session_token().ok_or_else(|| {
            ActionOutcome::failure(UNAUTHORIZED_STATUS, UNAUTHORIZED_MESSAGE)
        })
    }

    /// Apply a profile form submission on behalf of `token`.
    pub async fn update_profile(&self, token: &SessionToken, form: ProfileForm) -> ActionOutcome {
        let update = ProfileUpdate::from(form);
        match self.registry.update_profile(token, &update).await {
            Ok(()) => ActionOutcome::Success,
            Err(RegistryApiError::UnexpectedStatus { status }) => {
                debug!(status, "registry rejected profile update");
                ActionOutcome::failure(status, UPDATE_FAILED_MESSAGE)
            }
            Err(error) => {
                warn!(%error, "profile update did not reach the registry");
                ActionOutcome::failure(BAD_GATEWAY_STATUS, UPDATE_FAILED_MESSAGE)
            }
        }
    }
}

/// Replace a non-success status with the default value; keep other errors.
fn tolerate_status<T: Default>(
    result: Result<T, RegistryApiError>,
    part: &'static str,
) -> Result<T, RegistryApiError> {
    match result {
        Err(RegistryApiError::UnexpectedStatus { status }) => {
            debug!(part, status, "registry call unsuccessful; using empty value");
            Ok(T::default())
        }
        other => other,
    }
}
