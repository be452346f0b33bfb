//! Response format negotiation.

use actix_web::HttpRequest;
use actix_web::http::header::{Accept, Header};

/// Whether the client ranks `application/json` above every other media type.
///
/// Browsers send `text/html` first and get pages; scripted clients asking for
/// JSON get the raw data.
pub fn prefers_json(req: &HttpRequest) -> bool {
    Accept::parse(req)
        .ok()
        .and_then(|accept| accept.ranked().into_iter().next())
        .is_some_and(|mime| mime.essence_str() == "application/json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::ACCEPT;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    #[case::json("application/json", true)]
    #[case::json_ranked_first("application/json, text/html;q=0.9", true)]
    #[case::browser("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8", false)]
    #[case::json_ranked_lower("text/html, application/json;q=0.5", false)]
    #[case::anything("*/*", false)]
    fn ranks_accept_header(#[case] accept: &str, #[case] expected: bool) {
        let req = TestRequest::default()
            .insert_header((ACCEPT, accept))
            .to_http_request();
        assert_eq!(prefers_json(&req), expected);
    }

    #[rstest]
    fn missing_accept_gets_html() {
        let req = TestRequest::default().to_http_request();
        assert!(!prefers_json(&req));
    }
}
