//! Installer shortcut.
//!
//! ```text
//! GET /install  ->  301 Location: <installer script>
//! ```

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get};

/// Latest release of the installer script.
pub const INSTALLER_SCRIPT_URL: &str =
    "https://github.com/barforge/barforge-app/releases/latest/download/barforge-bin-installer.sh";

/// Permanently redirect to the installer script.
#[get("/install")]
pub async fn install() -> HttpResponse {
    HttpResponse::MovedPermanently()
        .insert_header((LOCATION, INSTALLER_SCRIPT_URL))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn redirects_permanently_to_the_installer() {
        let app = test::init_service(App::new().service(install)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/install").to_request())
            .await;

        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .expect("location header");
        assert!(location.ends_with("barforge-bin-installer.sh"));
    }
}
