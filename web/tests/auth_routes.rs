//! HTTP-level coverage for the auth relay, installer redirect and probes.

mod support;

use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use actix_web::test;
use barforge_web::domain::ports::{AuthResponse, AuthServiceError};
use barforge_web::domain::TRACE_ID_HEADER;
use rstest::rstest;
use serde_json::Value;

use support::Harness;

#[rstest]
#[actix_web::test]
async fn sign_in_posts_are_relayed_verbatim() {
    let harness = Harness::new();
    harness.auth.set_response(Ok(AuthResponse {
        status: 302,
        headers: vec![
            (
                "location".into(),
                "https://github.com/login/oauth/authorize?client_id=abc".into(),
            ),
            ("set-cookie".into(), "authjs.state=s1; Path=/; HttpOnly".into()),
            ("set-cookie".into(), "authjs.pkce=p1; Path=/; HttpOnly".into()),
        ],
        body: Vec::new(),
    }));
    let app = harness.app().await;

    let req = test::TestRequest::post()
        .uri("/auth/signin/github?callbackUrl=%2Fdashboard")
        .insert_header((COOKIE, "authjs.csrf-token=csrf"))
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("csrfToken=csrf")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("https://github.com/login/oauth/authorize?client_id=abc")
    );
    assert_eq!(res.headers().get_all(SET_COOKIE).count(), 2);

    let calls = harness.auth.calls();
    assert_eq!(calls.len(), 1);
    let forwarded = &calls[0];
    assert_eq!(forwarded.method, "POST");
    assert_eq!(
        forwarded.path_and_query,
        "/auth/signin/github?callbackUrl=%2Fdashboard"
    );
    assert_eq!(forwarded.body, b"csrfToken=csrf");
    assert!(
        forwarded
            .headers
            .iter()
            .any(|(name, value)| name == "cookie" && value == "authjs.csrf-token=csrf")
    );
}

#[rstest]
#[case("/auth/session")]
#[case("/auth/callback/github?code=xyz&state=s1")]
#[case("/auth/signout")]
#[actix_web::test]
async fn every_auth_path_reaches_the_handler(#[case] uri: &str) {
    let harness = Harness::new();
    harness.auth.set_response(Ok(AuthResponse {
        status: 200,
        headers: vec![("content-type".into(), "application/json".into())],
        body: b"{}".to_vec(),
    }));
    let app = harness.app().await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(test::read_body(res).await.as_ref(), b"{}");
    assert_eq!(harness.auth.calls()[0].path_and_query, uri);
}

#[rstest]
#[actix_web::test]
async fn unreachable_auth_service_is_unavailable() {
    let harness = Harness::new();
    harness
        .auth
        .set_response(Err(AuthServiceError::transport("connection refused")));
    let app = harness.app().await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/auth/session").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "service_unavailable");
    assert_eq!(body["traceId"].as_str(), trace_id.as_deref());
}

#[rstest]
#[actix_web::test]
async fn install_redirects_to_the_installer_script() {
    let app = Harness::new().app().await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/install").to_request()).await;

    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    let location = res
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header");
    assert!(location.ends_with("barforge-bin-installer.sh"));
}

#[rstest]
#[actix_web::test]
async fn liveness_probe_is_served() {
    let app = Harness::new().app().await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
}
