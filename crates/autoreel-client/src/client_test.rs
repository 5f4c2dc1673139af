use super::*;

fn test_client(base_url: &str) -> AutoreelClient {
    AutoreelClient::new(base_url, 30).expect("client construction should not fail")
}

#[test]
fn build_url_appends_endpoint_to_base_path() {
    let client = test_client("http://localhost:8000/api/v1");
    let url = client.build_url("/dashboard/stats", &[]);
    assert_eq!(url.as_str(), "http://localhost:8000/api/v1/dashboard/stats");
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("http://localhost:8000/api/v1/");
    let url = client.build_url("/reels", &[("status", "posted")]);
    assert_eq!(url.as_str(), "http://localhost:8000/api/v1/reels?status=posted");
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("http://localhost:8000/api/v1");
    let url = client.build_url("/logs", &[("level", "a&b c")]);
    assert!(
        url.as_str().contains("a%26b+c"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn new_rejects_malformed_and_non_http_urls() {
    assert!(matches!(
        AutoreelClient::new("not a url", 30),
        Err(ClientError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        AutoreelClient::new("ftp://example.com/api", 30),
        Err(ClientError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn status_error_uses_canonical_reason_and_envelope_detail() {
    let body = r#"{"error":{"code":"internal_error","message":"database unavailable"}}"#;
    match status_error(StatusCode::INTERNAL_SERVER_ERROR, body) {
        ClientError::Status {
            status,
            message,
            detail,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "API request failed: Internal Server Error");
            assert_eq!(detail.as_deref(), Some("database unavailable"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn status_error_tolerates_non_json_body() {
    let err = status_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    assert!(matches!(
        err,
        ClientError::Status { status: 502, detail: None, .. }
    ));
    assert_eq!(err.status(), Some(502));
}
