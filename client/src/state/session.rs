//! Session token store backed by browser cookies.
//!
//! DESIGN
//! ======
//! There is no expiry tracking or refresh rotation: holding either token is
//! treated as being signed in, both here and in the server route guard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::cookies::{self, ACCESS_TOKEN, REDIRECT_TO, REFRESH_TOKEN};
use crate::util::route_guard::LOGIN_PATH;

/// Access and refresh bearer tokens, each absent when logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Build from a `Cookie:` request header or a `document.cookie` string.
    pub fn from_cookie_header(header: &str) -> Self {
        Self {
            access_token: cookies::find_in_header(header, ACCESS_TOKEN),
            refresh_token: cookies::find_in_header(header, REFRESH_TOKEN),
        }
    }

    /// Read the current browser session.
    pub fn load() -> Self {
        Self::from_cookie_header(&cookies::document_cookie())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() || self.refresh_token.is_some()
    }

    /// `Authorization` header value for the access token, if any.
    pub fn bearer(&self) -> Option<String> {
        self.access_token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Persist a freshly issued token pair.
pub fn store(access: &str, refresh: &str) {
    cookies::set(ACCESS_TOKEN, access);
    cookies::set(REFRESH_TOKEN, refresh);
}

/// Drop both tokens, keeping any pending post-login redirect.
pub fn clear_tokens() {
    cookies::remove(ACCESS_TOKEN);
    cookies::remove(REFRESH_TOKEN);
}

/// Drop every session cookie, including the post-login redirect.
pub fn clear_all() {
    clear_tokens();
    cookies::remove(REDIRECT_TO);
}

/// Remember where to go once the visitor has logged in.
pub fn stash_redirect(path: &str) {
    cookies::set(REDIRECT_TO, path);
}

/// Read and forget the stashed post-login redirect.
pub fn take_redirect() -> Option<String> {
    let target = cookies::get(REDIRECT_TO);
    cookies::remove(REDIRECT_TO);
    target
}

/// Tear down a session the backend rejected and reload on the login page.
pub fn end_session() {
    clear_tokens();
    hard_navigate(LOGIN_PATH);
}

/// Full page navigation, bypassing the client router.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
