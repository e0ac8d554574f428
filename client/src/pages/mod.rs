//! Routed page components.

pub mod forgot_password;
pub mod home;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod verify;
