//! Account verification page for the one-time code emailed at signup.
//!
//! Reached as `/verify?email=...`; without an address there is nothing to
//! verify and the visitor is sent back to signup.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::form_field::{FormField, FormRootError};
use crate::net::api;
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::util::form_errors::FormErrors;
use crate::util::validate::VerifyForm;

const VERIFY_FAILED: &str = "An error occurred during verification";

#[component]
pub fn VerifyPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let email = Memo::new(move |_| query.read().get("email").filter(|e| !e.is_empty()));

    let navigate_signup = navigate.clone();
    Effect::new(move || {
        if email.get().is_none() {
            navigate_signup("/signup", NavigateOptions::default());
        }
    });

    let otp = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(address) = email.get_untracked() else {
            return;
        };
        let form = VerifyForm { otp: otp.get_untracked() };
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::verify(&address, form.otp.trim()).await {
                Ok(_) => {
                    notify(notices, NoticeKind::Success, "Account verified successfully!");
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => errors.set(e.form_errors(VERIFY_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <Show when=move || email.get().is_some()>
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Verify your account"</h1>
                    <p class="auth-card__subtitle">
                        "Enter the code sent to " <strong>{move || email.get().unwrap_or_default()}</strong>
                    </p>
                    <form class="auth-form" on:submit=on_submit.clone() novalidate=true>
                        <FormRootError errors=errors/>
                        <FormField name="otp" label="Verification Code" placeholder="123456" value=otp errors=errors/>
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Verifying..." } else { "Verify" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
