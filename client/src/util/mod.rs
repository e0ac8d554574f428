//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. `route_guard` is also used by the
//! server crate's middleware.

pub mod auth;
pub mod cookies;
pub mod form_errors;
pub mod route_guard;
pub mod validate;
