use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::test_support::block_on_ready;
use crate::util::cookies::{self, REDIRECT_TO};

#[test]
fn no_decision_while_loading() {
    let state = AuthState::default();
    assert_eq!(guard_decision(&state, "/track"), None);
    assert_eq!(guard_decision(&state, "/login"), None);
}

#[test]
fn unauthenticated_protected_route_redirects_to_login() {
    assert_eq!(
        guard_decision(&AuthState::signed_out(), "/chat"),
        Some(GuardDecision::RedirectToLogin { return_to: "/chat".to_owned() })
    );
}

#[test]
fn authenticated_auth_route_redirects_home() {
    assert_eq!(guard_decision(&AuthState::signed_in(), "/signup"), Some(GuardDecision::RedirectToHome));
}

#[test]
fn public_route_is_allowed_either_way() {
    assert_eq!(guard_decision(&AuthState::signed_in(), "/verify"), Some(GuardDecision::Allow));
    assert_eq!(guard_decision(&AuthState::signed_out(), "/verify"), Some(GuardDecision::Allow));
}

// =============================================================
// logout
// =============================================================

fn recording_navigate() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str, NavigateOptions)) {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visited);
    (visited, move |path: &str, _: NavigateOptions| sink.borrow_mut().push(path.to_owned()))
}

#[test]
fn logout_clears_every_session_cookie() {
    let owner = Owner::new();
    owner.with(|| {
        session::store("acc", "ref");
        session::stash_redirect("/track/3");
        let auth = RwSignal::new(AuthState::signed_in());
        let (visited, navigate) = recording_navigate();

        block_on_ready(logout(auth, navigate));

        assert_eq!(Session::load(), Session::default());
        assert_eq!(cookies::get(REDIRECT_TO), None);
        assert_eq!(auth.get_untracked(), AuthState::signed_out());
        assert_eq!(*visited.borrow(), vec![LOGIN_PATH.to_owned()]);
    });
}

#[test]
fn logout_without_refresh_token_still_signs_out() {
    let owner = Owner::new();
    owner.with(|| {
        cookies::set(cookies::ACCESS_TOKEN, "acc");
        let auth = RwSignal::new(AuthState::signed_in());
        let (visited, navigate) = recording_navigate();

        block_on_ready(logout(auth, navigate));

        assert_eq!(Session::load(), Session::default());
        assert!(!auth.get_untracked().authenticated);
        assert_eq!(*visited.borrow(), vec![LOGIN_PATH.to_owned()]);
    });
}
