//! Password reset confirmation page, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::form_field::{FormField, FormRootError};
use crate::net::api;
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::util::form_errors::FormErrors;
use crate::util::validate::ResetPasswordForm;

const RESET_FAILED: &str = "An error occurred while resetting your password";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let token = Memo::new(move |_| params.read().get("token").unwrap_or_default());

    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ResetPasswordForm { password: password.get_untracked(), password2: password2.get_untracked() };
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        let token = token.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::reset_password(&token, &form.password, &form.password2).await {
                Ok(_) => {
                    notify(notices, NoticeKind::Success, "Password has been reset successfully");
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => errors.set(e.form_errors(RESET_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">"Choose a new password"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormRootError errors=errors/>
                    <FormField name="password" label="New Password" input_type="password" value=password errors=errors/>
                    <FormField
                        name="password2"
                        label="Confirm Password"
                        input_type="password"
                        value=password2
                        errors=errors
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
