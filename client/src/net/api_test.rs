use super::*;

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(LOGIN_ENDPOINT, "/auth/login/");
    assert_eq!(REGISTER_ENDPOINT, "/auth/register/");
    assert_eq!(VERIFY_ENDPOINT, "/auth/verify/");
    assert_eq!(PASSWORD_RESET_ENDPOINT, "/auth/password-reset/");
    assert_eq!(PASSWORD_RESET_CONFIRM_ENDPOINT, "/auth/password-reset/confirm/");
}

#[test]
fn verify_page_path_carries_email_query() {
    assert_eq!(verify_page_path("fern"), "/verify?email=fern");
}

#[test]
fn verify_page_path_escapes_email() {
    assert_eq!(verify_page_path("a@b.co"), "/verify?email=a%40b%2Eco");
    assert!(!verify_page_path("a b@example.com").contains(' '));
}
