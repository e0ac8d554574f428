//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! In-app navigations never hit the server middleware, so the hydrated app
//! re-applies the route guard here and owns the logout sequence.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::route_guard::{self, GuardDecision, HOME_PATH, LOGIN_PATH};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::session::{self, Session};

/// Guard decision for the current state, or `None` while auth is unresolved.
pub fn guard_decision(state: &AuthState, path: &str) -> Option<GuardDecision> {
    if state.loading {
        return None;
    }
    Some(route_guard::decide(path, state.authenticated))
}

/// Re-run the route guard on every location change and once auth resolves.
///
/// Login and logout change auth state and then navigate themselves, so auth
/// flips alone do not re-trigger the guard; only the location change does.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let resolved = Memo::new(move |_| auth.with(|a| !a.loading));
    Effect::new(move || {
        let path = pathname.get();
        if !resolved.get() {
            return;
        }
        match guard_decision(&auth.get_untracked(), &path) {
            Some(GuardDecision::RedirectToLogin { return_to }) => {
                session::stash_redirect(&return_to);
                navigate(LOGIN_PATH, NavigateOptions::default());
            }
            Some(GuardDecision::RedirectToHome) => navigate(HOME_PATH, NavigateOptions::default()),
            Some(GuardDecision::Allow) | None => {}
        }
    });
}

/// Resolve auth state from cookies once the app is mounted in the browser.
pub fn install_session_check(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        auth.set(AuthState::from_session(&Session::load()));
    });
}

/// Sign out: best-effort server invalidation, then drop every session cookie
/// and go to the login page regardless of the outcome.
pub async fn logout<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some(refresh) = Session::load().refresh_token {
        if let Err(e) = api::logout(&refresh).await {
            #[cfg(feature = "hydrate")]
            log::warn!("logout request failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
    }

    session::clear_all();
    auth.set(AuthState::signed_out());
    navigate(LOGIN_PATH, NavigateOptions::default());
}
