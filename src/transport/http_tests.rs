//! Tests for HTTP request/response value types.

use super::{HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://gateway.example.com/v1/transactions").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn get_creates_get_request_without_body() {
        let request = HttpRequest::get(test_url());

        assert_eq!(request.method, http::Method::GET);
        assert_eq!(request.url, test_url());
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let request = HttpRequest::post(test_url());
        assert_eq!(request.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let request = HttpRequest::post(test_url()).with_body(b"{}".to_vec());
        assert_eq!(request.body, Some(b"{}".to_vec()));
    }

    #[test]
    fn with_header_appends_headers() {
        let request = HttpRequest::post(test_url())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_static("Basic dXNlcjpwYXNz"),
            );

        assert_eq!(request.headers.len(), 2);
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_for_2xx() {
        let response = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![]);
        assert!(response.is_success());

        let accepted =
            HttpResponse::new(http::StatusCode::ACCEPTED, http::HeaderMap::new(), vec![]);
        assert!(accepted.is_success());
    }

    #[test]
    fn is_not_success_for_4xx_and_5xx() {
        let not_found =
            HttpResponse::new(http::StatusCode::NOT_FOUND, http::HeaderMap::new(), vec![]);
        assert!(!not_found.is_success());

        let server_error = HttpResponse::new(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            http::HeaderMap::new(),
            vec![],
        );
        assert!(!server_error.is_success());
    }

    #[test]
    fn body_text_returns_utf8_body() {
        let response = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"Accepted".to_vec(),
        );
        assert_eq!(response.body_text(), Some("Accepted"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        let response = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xff, 0xfe],
        );
        assert_eq!(response.body_text(), None);
    }

    #[test]
    fn header_returns_first_value() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::LOCATION,
            http::HeaderValue::from_static("https://gateway.example.com/v1/transactions/abc123"),
        );
        let response = HttpResponse::new(http::StatusCode::ACCEPTED, headers, vec![]);

        assert_eq!(
            response.header(&http::header::LOCATION),
            Some("https://gateway.example.com/v1/transactions/abc123")
        );
    }

    #[test]
    fn header_returns_none_when_absent() {
        let response = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![]);
        assert_eq!(response.header(&http::header::LOCATION), None);
    }
}
