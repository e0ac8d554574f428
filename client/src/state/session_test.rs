use super::*;

#[test]
fn from_cookie_header_reads_both_tokens() {
    let session = Session::from_cookie_header("accessToken=a1; refreshToken=r1; redirectTo=/shop");
    assert_eq!(session.access_token.as_deref(), Some("a1"));
    assert_eq!(session.refresh_token.as_deref(), Some("r1"));
    assert!(session.is_authenticated());
}

#[test]
fn either_token_counts_as_authenticated() {
    assert!(Session::from_cookie_header("accessToken=a1").is_authenticated());
    assert!(Session::from_cookie_header("refreshToken=r1").is_authenticated());
}

#[test]
fn no_tokens_is_unauthenticated() {
    assert!(!Session::default().is_authenticated());
    assert!(!Session::from_cookie_header("redirectTo=/track").is_authenticated());
    assert!(!Session::from_cookie_header("accessToken=; refreshToken=").is_authenticated());
}

#[test]
fn bearer_formats_access_token() {
    let session = Session { access_token: Some("tok".to_owned()), refresh_token: None };
    assert_eq!(session.bearer().as_deref(), Some("Bearer tok"));
}

#[test]
fn bearer_ignores_refresh_only_session() {
    let session = Session { access_token: None, refresh_token: Some("r".to_owned()) };
    assert_eq!(session.bearer(), None);
}

#[test]
fn load_is_empty_without_cookies() {
    assert_eq!(Session::load(), Session::default());
    assert_eq!(take_redirect(), None);
}

// =============================================================
// cookie lifecycle
// =============================================================

#[test]
fn store_then_load_round_trips_tokens() {
    store("acc", "ref");
    let session = Session::load();
    assert_eq!(session.access_token.as_deref(), Some("acc"));
    assert_eq!(session.refresh_token.as_deref(), Some("ref"));
}

#[test]
fn take_redirect_consumes_stash() {
    stash_redirect("/orders/5");
    assert_eq!(take_redirect().as_deref(), Some("/orders/5"));
    assert_eq!(take_redirect(), None);
}

#[test]
fn end_session_clears_tokens_and_keeps_redirect() {
    store("acc", "ref");
    stash_redirect("/track/3");
    end_session();
    assert_eq!(Session::load(), Session::default());
    assert_eq!(cookies::get(REDIRECT_TO).as_deref(), Some("/track/3"));
}

#[test]
fn clear_all_drops_redirect_too() {
    store("acc", "ref");
    stash_redirect("/track/3");
    clear_all();
    assert_eq!(Session::load(), Session::default());
    assert_eq!(cookies::get(REDIRECT_TO), None);
}
