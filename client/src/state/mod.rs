//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` cookies, derived `auth` flag,
//! `notice` queue) so pages depend only on the small models they use.

pub mod auth;
pub mod notice;
pub mod session;
