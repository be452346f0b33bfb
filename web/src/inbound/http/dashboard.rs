//! Dashboard page and its form actions.
//!
//! ```text
//! GET  /dashboard
//! POST /dashboard?/updateProfile   display_name=..&bio=..&website_url=..
//! ```
//!
//! Browsers get HTML. Clients whose `Accept` header prefers JSON get the
//! loader data, or an action result envelope for form posts.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use maud::Markup;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{ActionOutcome, Error, ProfileForm};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::prefers_json;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::render::dashboard::{self, DashboardView};

const UPDATE_PROFILE_ACTION: &str = "updateProfile";

/// Action result envelope returned to JSON clients.
///
/// Example JSON:
/// `{"type":"failure","status":401,"data":{"message":"Unauthorized"}}`
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionResultDto {
    /// The action completed.
    Success {
        /// HTTP-style status of the action.
        status: u16,
    },
    /// The action failed; `data` carries the user-facing message.
    Failure {
        /// HTTP-style status of the action.
        status: u16,
        /// Failure details shown to the user.
        data: FailureDataDto,
    },
}

/// Payload attached to failed actions.
#[derive(Debug, Serialize)]
pub struct FailureDataDto {
    /// User-facing failure message.
    pub message: String,
}

impl From<&ActionOutcome> for ActionResultDto {
    fn from(outcome: &ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::Success => Self::Success {
                status: outcome.status(),
            },
            ActionOutcome::Failure { status, message } => Self::Failure {
                status: *status,
                data: FailureDataDto {
                    message: message.clone(),
                },
            },
        }
    }
}

/// Render the dashboard for the current visitor.
#[get("/dashboard")]
pub async fn dashboard_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
) -> HttpResponse {
    let data = state.dashboard.load(session.context()).await;
    if prefers_json(&req) {
        return HttpResponse::Ok().json(&data);
    }
    html_response(StatusCode::OK, dashboard::render(DashboardView::loaded(&data)))
}

/// Dispatch a named form action posted to the dashboard.
///
/// The action name is the query string with its leading `/` removed, so the
/// form posts to `?/updateProfile`. The action name and the session are
/// checked before the submitted form is looked at.
#[post("/dashboard")]
pub async fn dashboard_action(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    form: Result<web::Form<ProfileForm>, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let action = action_name(req.query_string());
    if action != Some(UPDATE_PROFILE_ACTION) {
        warn!(action = ?action, "unknown dashboard action");
        return Err(Error::not_found(format!(
            "No action named {} on /dashboard",
            action.unwrap_or("default")
        )));
    }

    let context = session.context();
    let (outcome, submitted) = match state.dashboard.authorise_action(context).await {
        Err(outcome) => (outcome, None),
        Ok(token) => {
            let form = form
                .map_err(|error| {
                    Error::invalid_request(format!("invalid form submission: {error}"))
                })?
                .into_inner();
            let outcome = state.dashboard.update_profile(token, form.clone()).await;
            (outcome, Some(form))
        }
    };
    info!(status = outcome.status(), "profile update action finished");

    if prefers_json(&req) {
        return Ok(HttpResponse::Ok().json(ActionResultDto::from(&outcome)));
    }

    let data = state.dashboard.load(context).await;
    let submitted = submitted
        .as_ref()
        .filter(|_| matches!(outcome, ActionOutcome::Failure { .. }));
    let markup = dashboard::render(DashboardView {
        data: &data,
        outcome: Some(&outcome),
        submitted,
    });
    let status = StatusCode::from_u16(outcome.status()).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok(html_response(status, markup))
}

fn action_name(query: &str) -> Option<&str> {
    let first = query.split('&').next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('=').next().unwrap_or(name);
    (!name.is_empty()).then_some(name)
}

fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(markup.into_string())
}
