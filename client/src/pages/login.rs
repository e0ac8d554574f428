//! Login page: exchanges credentials for a token pair and resumes the
//! route the visitor was bounced from.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, FormRootError};
use crate::net::api;
use crate::net::types::LoginResponse;
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::state::session;
use crate::util::form_errors::FormErrors;
use crate::util::route_guard::post_login_target;
use crate::util::validate::LoginForm;

const LOGIN_FAILED: &str = "An error occurred during login";

/// Store the issued tokens and consume the stashed redirect.
///
/// Returns the path to land on, or `None` when the backend handed back an
/// empty token.
pub fn complete_login(tokens: &LoginResponse) -> Option<String> {
    if tokens.access.is_empty() || tokens.refresh.is_empty() {
        return None;
    }
    session::store(&tokens.access, &tokens.refresh);
    Some(post_login_target(session::take_redirect().as_deref()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(form.email.trim(), &form.password).await {
                Ok(tokens) => match complete_login(&tokens) {
                    Some(target) => {
                        auth.set(AuthState::signed_in());
                        notify(notices, NoticeKind::Success, "Login successful!");
                        navigate(&target, NavigateOptions::default());
                    }
                    None => errors.set(FormErrors::with_root(LOGIN_FAILED)),
                },
                Err(e) => errors.set(e.form_errors(LOGIN_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Login to continue your green journey"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormRootError errors=errors/>
                    <FormField
                        name="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=email
                        errors=errors
                    />
                    <FormField name="password" label="Password" input_type="password" value=password errors=errors/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/signup">"Sign up"</a>
                </p>
                <p class="auth-card__footer">
                    <a href="/forgot-password">"Forgot your password?"</a>
                </p>
            </div>
        </div>
    }
}
