//! Auth protocol relay.
//!
//! ```text
//! GET  /auth/{tail:.*}
//! POST /auth/{tail:.*}
//! ```
//!
//! Sign-in, OAuth callbacks, sign-out and CSRF endpoints belong to the auth
//! service. Requests are forwarded unchanged and the service's response,
//! including `Set-Cookie` and `Location`, is returned as-is.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::warn;

use crate::domain::Error;
use crate::domain::ports::{AuthRequest, AuthResponse, is_end_to_end_header};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Route pattern covering every auth endpoint.
pub const AUTH_ROUTE: &str = "/auth/{tail:.*}";

/// Register the relay for `GET` and `POST`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(AUTH_ROUTE)
            .route(web::get().to(relay))
            .route(web::post().to(relay)),
    );
}

/// Forward one request to the auth service.
pub async fn relay(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = auth_request(&req, body);
    let path = request.path_and_query.clone();
    let response = state.auth.handle(request).await.map_err(|error| {
        warn!(error = %error, path = %path, "auth service unavailable");
        Error::service_unavailable("Authentication service unavailable")
    })?;
    into_http_response(response)
}

fn auth_request(req: &HttpRequest, body: web::Bytes) -> AuthRequest {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned());
    let headers = req
        .headers()
        .iter()
        .filter(|(name, _)| is_end_to_end_header(name.as_str()))
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_owned(), value.to_owned()))
        })
        .collect();
    AuthRequest {
        method: req.method().as_str().to_owned(),
        path_and_query,
        headers,
        body: body.to_vec(),
    }
}

fn into_http_response(response: AuthResponse) -> ApiResult<HttpResponse> {
    let status = StatusCode::from_u16(response.status).map_err(|_| {
        Error::service_unavailable("Authentication service returned an invalid status")
    })?;
    let mut builder = HttpResponse::build(status);
    for (name, value) in response.headers {
        builder.append_header((name, value));
    }
    Ok(builder.body(response.body))
}
