//! Signup page: creates an inactive account and hands off to verification.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, FormRootError};
use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::util::form_errors::FormErrors;
use crate::util::validate::SignupForm;

const SIGNUP_FAILED: &str = "An error occurred during registration";

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm {
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            password2: password2.get_untracked(),
        };
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = RegisterRequest {
                email: form.email.trim().to_owned(),
                username: form.username,
                password: form.password,
                password2: form.password2,
            };
            match api::register(&request).await {
                Ok(resp) => {
                    let email = resp.user.map_or(request.email, |user| user.email);
                    navigate(&api::verify_page_path(&email), NavigateOptions::default());
                }
                Err(e) => errors.set(e.form_errors(SIGNUP_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign up for SproutBotanica"</h1>
                <p class="auth-card__subtitle">"Create your account and start your green journey"</p>
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
                    <FormField name="username" label="Username" placeholder="johndoe" value=username errors=errors/>
                    <FormField name="password" label="Password" input_type="password" value=password errors=errors/>
                    <FormField
                        name="password2"
                        label="Confirm Password"
                        input_type="password"
                        value=password2
                        errors=errors
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
