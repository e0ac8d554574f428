use serde_json::json;

use super::*;
use crate::test_support::block_on_ready;

// =============================================================
// URL building
// =============================================================

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://api.test/", "/auth/login/"), "http://api.test/auth/login/");
    assert_eq!(join_url("http://api.test", "plants/"), "http://api.test/plants/");
}

#[test]
fn client_url_uses_configured_base() {
    let client = ApiClient::session().with_base_url("https://sprout.example");
    assert_eq!(client.url("/store/cart/"), "https://sprout.example/store/cart/");
}

#[test]
fn default_base_url_without_build_env() {
    if option_env!("SPROUT_API_URL").is_none() {
        assert_eq!(api_base_url(), DEFAULT_API_URL);
    }
}

// =============================================================
// Request phase
// =============================================================

#[test]
fn session_client_attaches_bearer() {
    let session = Session::from_cookie_header("accessToken=abc");
    assert_eq!(authorization_header(&session, Interception::Session).as_deref(), Some("Bearer abc"));
}

#[test]
fn session_client_without_access_token_sends_nothing() {
    let session = Session::from_cookie_header("refreshToken=r");
    assert_eq!(authorization_header(&session, Interception::Session), None);
}

#[test]
fn public_client_never_attaches_bearer() {
    let session = Session::from_cookie_header("accessToken=abc");
    assert_eq!(authorization_header(&session, Interception::Public), None);
}

// =============================================================
// Response phase
// =============================================================

#[test]
fn any_401_on_session_client_ends_session() {
    assert_eq!(classify_status(401, Interception::Session), ResponseDisposition::EndSession);
}

#[test]
fn public_401_is_an_ordinary_failure() {
    assert_eq!(classify_status(401, Interception::Public), ResponseDisposition::Failure);
}

#[test]
fn other_statuses_pass_through() {
    for status in [200, 201, 204, 205] {
        assert_eq!(classify_status(status, Interception::Session), ResponseDisposition::Success);
    }
    for status in [400, 403, 404, 500] {
        assert_eq!(classify_status(status, Interception::Session), ResponseDisposition::Failure);
    }
}

#[test]
fn error_body_parses_json_or_keeps_text() {
    assert_eq!(error_body(r#"{"error":"nope"}"#), Some(json!({ "error": "nope" })));
    assert_eq!(error_body("Bad Gateway"), Some(json!("Bad Gateway")));
    assert_eq!(error_body("  "), None);
}

// =============================================================
// Flavors
// =============================================================

#[test]
fn flavors_differ_in_interception_and_timeout() {
    assert_eq!(ApiClient::public().interception(), Interception::Public);
    assert_eq!(ApiClient::public().timeout_ms(), Some(PUBLIC_TIMEOUT_MS));
    assert_eq!(ApiClient::session().interception(), Interception::Session);
    assert_eq!(ApiClient::session().timeout_ms(), None);
}

#[test]
fn calls_are_unavailable_off_browser() {
    let result = block_on_ready(ApiClient::public().get_json::<serde_json::Value>("/auth/me/"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
