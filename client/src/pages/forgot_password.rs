//! Password reset request page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, FormRootError};
use crate::net::api;
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::util::form_errors::FormErrors;
use crate::util::validate::ForgotPasswordForm;

const REQUEST_FAILED: &str = "An error occurred while requesting password reset";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ForgotPasswordForm { email: email.get_untracked() };
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::request_password_reset(form.email.trim()).await {
                Ok(_) => {
                    notify(notices, NoticeKind::Success, "Password reset instructions have been sent to your email");
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => errors.set(e.form_errors(REQUEST_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot Password"</h1>
                <p class="auth-card__subtitle">"We'll email you a link to reset it"</p>
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
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    <a href="/login">"Back to login"</a>
                </p>
            </div>
        </div>
    }
}
