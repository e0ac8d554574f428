//! Client-side checks run before any account form is submitted.
//!
//! Each form reports at most one message per field, mirroring how the
//! backend's field-keyed errors are displayed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use super::form_errors::FormErrors;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 8;
pub const OTP_LEN: usize = 6;

const EMAIL_INVALID: &str = "Please enter a valid email address.";
const PASSWORD_REQUIRED: &str = "Password is required";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
const PASSWORDS_DIFFER: &str = "Passwords do not match.";
const RESET_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
const RESET_PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Messages for a new-password pair; signup and reset word them differently.
struct NewPasswordMessages {
    too_short: &'static str,
    differ: &'static str,
}

const SIGNUP_PASSWORD: NewPasswordMessages =
    NewPasswordMessages { too_short: PASSWORD_TOO_SHORT, differ: PASSWORDS_DIFFER };
const RESET_PASSWORD: NewPasswordMessages =
    NewPasswordMessages { too_short: RESET_PASSWORD_TOO_SHORT, differ: RESET_PASSWORDS_DIFFER };

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if !is_valid_email(email) {
        errors.add("email", EMAIL_INVALID);
    }
}

fn check_new_password(errors: &mut FormErrors, password: &str, password2: &str, messages: &NewPasswordMessages) {
    if password.chars().count() < PASSWORD_MIN {
        errors.add("password", messages.too_short);
    }
    if password != password2 {
        errors.add("password2", messages.differ);
    }
}

fn check_username(errors: &mut FormErrors, username: &str) {
    let len = username.chars().count();
    if len < USERNAME_MIN {
        errors.add("username", "Username must be at least 3 characters.");
    } else if len > USERNAME_MAX {
        errors.add("username", "Username must be at most 20 characters.");
    } else if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.add("username", "Username can only contain letters, numbers, and underscores.");
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the failing fields when the form cannot be submitted.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_email(&mut errors, self.email.trim());
        if self.password.is_empty() {
            errors.add("password", PASSWORD_REQUIRED);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password2: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns the failing fields when the form cannot be submitted.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_email(&mut errors, self.email.trim());
        check_username(&mut errors, &self.username);
        check_new_password(&mut errors, &self.password, &self.password2, &SIGNUP_PASSWORD);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyForm {
    pub otp: String,
}

impl VerifyForm {
    /// # Errors
    ///
    /// Returns an `otp` error unless exactly six characters were entered.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        if self.otp.trim().chars().count() != OTP_LEN {
            errors.add("otp", "OTP must be 6 digits");
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    /// # Errors
    ///
    /// Returns an `email` error for malformed addresses.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_email(&mut errors, self.email.trim());
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub password2: String,
}

impl ResetPasswordForm {
    /// # Errors
    ///
    /// Returns the failing fields when the new password is unusable.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_new_password(&mut errors, &self.password, &self.password2, &RESET_PASSWORD);
        errors.into_result()
    }
}
