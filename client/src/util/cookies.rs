//! Browser cookie access for the session and post-login redirect cookies.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server-side route guard reads the same cookies from the request
//! header, so they are plain script-readable cookies scoped to `/`.
//!
//! Outside the browser the cookies live in a per-thread jar, so session
//! bookkeeping behaves the same in native builds and tests.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use cookie::{Cookie, SameSite};

pub const ACCESS_TOKEN: &str = "accessToken";
pub const REFRESH_TOKEN: &str = "refreshToken";
pub const REDIRECT_TO: &str = "redirectTo";

/// Find `name` in a `Cookie:` header style string (`a=1; b=2`).
///
/// Values are percent-decoded, matching how the server's cookie jar writes
/// them. Malformed pairs are skipped and empty values count as absent.
pub fn find_in_header(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// `document.cookie` assignment that sets `name=value` for the whole site.
pub fn set_assignment(name: &str, value: &str) -> String {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

/// `document.cookie` assignment that expires `name` immediately.
pub fn removal_assignment(name: &str) -> String {
    Cookie::build((name, ""))
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build()
        .to_string()
}

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static LOCAL_JAR: std::cell::RefCell<cookie::CookieJar> = std::cell::RefCell::new(cookie::CookieJar::new());
}

/// Raw `document.cookie` contents, or the local jar rendered the same way.
pub fn document_cookie() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LOCAL_JAR.with_borrow(|jar| {
            jar.iter()
                .map(|c| c.encoded().to_string())
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}

/// Read a cookie from the browser.
pub fn get(name: &str) -> Option<String> {
    find_in_header(&document_cookie(), name)
}

/// Set a site-wide cookie in the browser.
pub fn set(name: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    write(&set_assignment(name, value));
    #[cfg(not(feature = "hydrate"))]
    LOCAL_JAR.with_borrow_mut(|jar| jar.add(Cookie::new(name.to_owned(), value.to_owned())));
}

/// Expire a cookie in the browser.
pub fn remove(name: &str) {
    #[cfg(feature = "hydrate")]
    write(&removal_assignment(name));
    #[cfg(not(feature = "hydrate"))]
    LOCAL_JAR.with_borrow_mut(|jar| jar.remove(Cookie::new(name.to_owned(), "")));
}

#[cfg(feature = "hydrate")]
fn write(assignment: &str) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    let _ = doc.set_cookie(assignment);
}
