use super::*;

fn tokens(access: &str, refresh: &str) -> LoginResponse {
    LoginResponse { access: access.to_owned(), refresh: refresh.to_owned() }
}

#[test]
fn complete_login_defaults_to_home_without_stashed_redirect() {
    assert_eq!(complete_login(&tokens("a", "r")), Some("/".to_owned()));
}

#[test]
fn complete_login_rejects_empty_tokens() {
    session::stash_redirect("/track/3");
    assert_eq!(complete_login(&tokens("", "r")), None);
    assert_eq!(complete_login(&tokens("a", "")), None);
    assert_eq!(session::Session::load(), session::Session::default());
    assert_eq!(session::take_redirect().as_deref(), Some("/track/3"));
}

#[test]
fn complete_login_stores_tokens() {
    complete_login(&tokens("acc", "ref"));
    let stored = session::Session::load();
    assert_eq!(stored.access_token.as_deref(), Some("acc"));
    assert_eq!(stored.refresh_token.as_deref(), Some("ref"));
}

#[test]
fn complete_login_resumes_stashed_redirect_once() {
    session::stash_redirect("/track/3");
    assert_eq!(complete_login(&tokens("a", "r")), Some("/track/3".to_owned()));
    assert_eq!(session::take_redirect(), None);
}

#[test]
fn complete_login_ignores_foreign_stashed_redirect() {
    session::stash_redirect("//evil.example");
    assert_eq!(complete_login(&tokens("a", "r")), Some("/".to_owned()));
    assert_eq!(session::take_redirect(), None);
}
