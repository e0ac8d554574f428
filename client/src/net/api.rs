//! Backend account endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! All calls here go through the public client: a 401 from `/auth/login/`
//! means bad credentials and must reach the login form instead of tearing
//! down a session that does not exist yet.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{
    LoginRequest, LoginResponse, LogoutRequest, MessageResponse, PasswordResetConfirm, PasswordResetRequest,
    RegisterRequest, RegisterResponse, VerifyRequest,
};

pub const LOGIN_ENDPOINT: &str = "/auth/login/";
pub const REGISTER_ENDPOINT: &str = "/auth/register/";
pub const VERIFY_ENDPOINT: &str = "/auth/verify/";
pub const PASSWORD_RESET_ENDPOINT: &str = "/auth/password-reset/";
pub const PASSWORD_RESET_CONFIRM_ENDPOINT: &str = "/auth/password-reset/confirm/";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout/";

/// Page that collects the one-time code for a just-registered address.
pub fn verify_page_path(email: &str) -> String {
    format!("/verify?email={}", utf8_percent_encode(email, NON_ALPHANUMERIC))
}

/// Exchange credentials for a token pair.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the backend's error body on rejection.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    ApiClient::public().post_json(LOGIN_ENDPOINT, &body).await
}

/// Create an inactive account; the backend emails a one-time code.
///
/// # Errors
///
/// Returns `ApiError::Status` with field-keyed errors for rejected input.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    ApiClient::public().post_json(REGISTER_ENDPOINT, request).await
}

/// Activate an account with its one-time code.
///
/// # Errors
///
/// Returns `ApiError::Status` when the code is wrong or expired.
pub async fn verify(email: &str, otp: &str) -> Result<MessageResponse, ApiError> {
    let body = VerifyRequest { email: email.to_owned(), otp: otp.to_owned() };
    ApiClient::public().post_json(VERIFY_ENDPOINT, &body).await
}

/// Ask the backend to email a password reset link.
///
/// # Errors
///
/// Returns `ApiError::Status` for unknown addresses.
pub async fn request_password_reset(email: &str) -> Result<MessageResponse, ApiError> {
    let body = PasswordResetRequest { email: email.to_owned() };
    ApiClient::public().post_json(PASSWORD_RESET_ENDPOINT, &body).await
}

/// Set a new password using the token from the reset email.
///
/// # Errors
///
/// Returns `ApiError::Status` for invalid tokens or rejected passwords.
pub async fn reset_password(token: &str, password: &str, password2: &str) -> Result<MessageResponse, ApiError> {
    let body = PasswordResetConfirm {
        token: token.to_owned(),
        password: password.to_owned(),
        password2: password2.to_owned(),
    };
    ApiClient::public().post_json(PASSWORD_RESET_CONFIRM_ENDPOINT, &body).await
}

/// Blacklist the refresh token server-side.
///
/// # Errors
///
/// Returns any transport or status error; callers treat logout as best effort.
pub async fn logout(refresh: &str) -> Result<(), ApiError> {
    let body = LogoutRequest { refresh: refresh.to_owned() };
    ApiClient::public().post_unit(LOGOUT_ENDPOINT, &body).await
}
