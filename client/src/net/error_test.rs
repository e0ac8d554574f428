use serde_json::json;

use super::*;

#[test]
fn status_with_field_body_maps_fields() {
    let err = ApiError::Status { status: 400, body: Some(json!({ "email": ["Enter a valid email address."] })) };
    let errors = err.form_errors("fallback");
    assert_eq!(errors.field("email"), Some("Enter a valid email address."));
    assert_eq!(errors.root, None);
}

#[test]
fn status_without_body_uses_fallback() {
    let err = ApiError::Status { status: 500, body: None };
    assert_eq!(err.form_errors("fallback").root.as_deref(), Some("fallback"));
}

#[test]
fn transport_failures_use_fallback() {
    for err in [ApiError::Network("offline".to_owned()), ApiError::Timeout, ApiError::Decode("eof".to_owned())] {
        assert_eq!(err.form_errors("fallback"), FormErrors::with_root("fallback"));
    }
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status { status: 429, body: None };
    assert_eq!(err.to_string(), "request failed: 429");
}
