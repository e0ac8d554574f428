//! Route classification shared by the server middleware and client navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Full page loads are gated by the Axum middleware in the server crate;
//! in-app navigations never reach the server, so the hydrated app runs the
//! same `decide` against the router location.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Prefixes that require a session.
pub const PROTECTED_PREFIXES: &[&str] = &[
    "/track",
    "/chat",
    "/plant-id",
    "/shop",
    "/disease",
    "/cart",
    "/orders",
    "/profile",
    "/settings",
];

/// Prefixes only useful without a session.
pub const AUTH_ONLY_PREFIXES: &[&str] = &["/login", "/signup"];

/// Leptos bundle assets, API proxy and static files skip the guard entirely.
const PASSTHROUGH_PREFIXES: &[&str] = &["/pkg", "/api", "/static"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
    AuthOnly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send the visitor to `/login`, remembering where they were headed.
    RedirectToLogin { return_to: String },
    RedirectToHome,
}

/// Whether the path is served without looking at the session at all.
pub fn is_passthrough(path: &str) -> bool {
    path == HOME_PATH || PASSTHROUGH_PREFIXES.iter().any(|p| path.starts_with(p)) || path.contains('.')
}

pub fn classify(path: &str) -> RouteClass {
    if is_passthrough(path) {
        return RouteClass::Public;
    }
    if PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return RouteClass::Protected;
    }
    if AUTH_ONLY_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return RouteClass::AuthOnly;
    }
    RouteClass::Public
}

pub fn decide(path: &str, authenticated: bool) -> GuardDecision {
    match (classify(path), authenticated) {
        (RouteClass::Protected, false) => GuardDecision::RedirectToLogin { return_to: path.to_owned() },
        (RouteClass::AuthOnly, true) => GuardDecision::RedirectToHome,
        _ => GuardDecision::Allow,
    }
}

/// Where to land after a successful login.
///
/// Only same-origin absolute paths are honored. Browsers read a leading
/// `//` or `/\` as a host and drop tabs and newlines inside URLs, so those
/// forms fall back to home along with anything not starting with `/`.
pub fn post_login_target(redirect_to: Option<&str>) -> String {
    redirect_to
        .map(str::trim)
        .filter(|p| is_local_path(p))
        .unwrap_or(HOME_PATH)
        .to_owned()
}

fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/' | '\\'))
        && !path.chars().any(char::is_control)
}
