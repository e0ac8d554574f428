//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, notice_banner::NoticeBanner};
use crate::pages::{
    forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage, reset_password::ResetPasswordPage,
    signup::SignupPage, verify::VerifyPage,
};
use crate::state::{auth::AuthState, notice::NoticeState};
use crate::util::auth::{install_route_guard, install_session_check};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and notice contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(auth);
    provide_context(notices);

    install_session_check(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/sprout.css"/>
        <Title text="SproutBotanica"/>

        <Router>
            <RouteGuard/>
            <Header/>
            <NoticeBanner/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("verify") view=VerifyPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Applies the route guard to in-app navigations. Renders nothing.
#[component]
fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    install_route_guard(auth, location.pathname, use_navigate());
}
