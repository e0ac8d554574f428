//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let call_to_action = move || {
        let state = auth.get();
        if state.loading {
            ().into_any()
        } else if state.authenticated {
            view! { <a class="home-hero__cta" href="/track">"Go to My Plants"</a> }.into_any()
        } else {
            view! {
                <a class="home-hero__cta" href="/signup">"Get Started"</a>
                <a class="home-hero__secondary" href="/login">"I already have an account"</a>
            }
            .into_any()
        }
    };

    view! {
        <section class="home-hero">
            <h1>"Grow happier plants"</h1>
            <p>"Track your plants, identify new ones, and shop for everything they need."</p>
            <div class="home-hero__actions">{call_to_action}</div>
        </section>
    }
}
