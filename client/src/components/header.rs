//! Site header with auth-aware navigation and logout.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

const HOME: NavItem = NavItem { href: "/", label: "Home" };

const MEMBER_ITEMS: &[NavItem] = &[
    NavItem { href: "/track", label: "My Plants" },
    NavItem { href: "/chat", label: "Chat" },
    NavItem { href: "/plant-id", label: "Plant ID" },
    NavItem { href: "/shop", label: "Store" },
    NavItem { href: "/disease", label: "Disease Detection" },
];

/// Links shown for the given auth state; members-only links are hidden
/// from visitors without a session.
pub fn nav_items(authenticated: bool) -> Vec<NavItem> {
    let mut items = vec![HOME];
    if authenticated {
        items.extend_from_slice(MEMBER_ITEMS);
    }
    items
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::util::auth::logout(auth, navigate).await;
            busy.set(false);
        });
    };

    let links = move || {
        let state = auth.get();
        let items = if state.loading { Vec::new() } else { nav_items(state.authenticated) };
        items
            .into_iter()
            .map(|item| view! { <a href=item.href class="site-header__link">{item.label}</a> })
            .collect_view()
    };

    let account = move || {
        let state = auth.get();
        if state.loading {
            ().into_any()
        } else if state.authenticated {
            let on_logout = on_logout.clone();
            view! {
                <button class="site-header__logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            }
            .into_any()
        } else {
            view! {
                <a href="/login" class="site-header__link">"Login"</a>
                <a href="/signup" class="site-header__link">"Sign Up"</a>
            }
            .into_any()
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"SproutBotanica"</a>
            <nav class="site-header__nav">{links}</nav>
            <div class="site-header__account">{account}</div>
        </header>
    }
}
