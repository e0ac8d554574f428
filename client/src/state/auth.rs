//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context by the root `App`. The header
//! and the client-side route guard read it; login and logout write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Whether the visitor holds a session, plus whether that is still unknown.
///
/// `loading` is only true until the first cookie check after hydration; the
/// server render never leaves it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { authenticated: false, loading: true }
    }
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self { authenticated: session.is_authenticated(), loading: false }
    }

    pub fn signed_in() -> Self {
        Self { authenticated: true, loading: false }
    }

    pub fn signed_out() -> Self {
        Self { authenticated: false, loading: false }
    }
}
