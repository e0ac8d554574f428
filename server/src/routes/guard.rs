//! Route guard middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs in front of every request, before Leptos renders a page. The
//! classification itself lives in `sprout_client::util::route_guard` so the
//! hydrated app applies identical rules to in-app navigations.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sprout_client::state::session::Session;
use sprout_client::util::cookies::{ACCESS_TOKEN, REDIRECT_TO, REFRESH_TOKEN};
use sprout_client::util::route_guard::{GuardDecision, HOME_PATH, LOGIN_PATH, decide};

/// Settings the guard needs from server config.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardSettings {
    pub cookie_secure: bool,
}

/// Session tokens carried by the request cookies.
pub fn session_from_jar(jar: &CookieJar) -> Session {
    let value = |name: &str| {
        jar.get(name)
            .map(|c| c.value().to_owned())
            .filter(|v| !v.is_empty())
    };
    Session { access_token: value(ACCESS_TOKEN), refresh_token: value(REFRESH_TOKEN) }
}

pub async fn route_guard(
    State(settings): State<GuardSettings>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = session_from_jar(&jar).is_authenticated();
    let path = request.uri().path().to_owned();

    match decide(&path, authenticated) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectToLogin { return_to } => {
            tracing::debug!(%path, "protected route without session, redirecting to login");
            let cookie = Cookie::build((REDIRECT_TO, return_to))
                .path("/")
                .same_site(SameSite::Lax)
                .secure(settings.cookie_secure);
            (jar.add(cookie), Redirect::temporary(LOGIN_PATH)).into_response()
        }
        GuardDecision::RedirectToHome => {
            tracing::debug!(%path, "auth route with session, redirecting home");
            Redirect::temporary(HOME_PATH).into_response()
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
