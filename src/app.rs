//! Root application component with routing, contexts, and the session guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::config::Config;
use crate::pages::{admin::AdminPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::auth::{HOME_PATH, install_session_guard};

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
/// Provides the session store and endpoint configuration as injected
/// context values and sets up client-side routing with the session guard
/// installed above the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(Config::from_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-client.css"/>
        <Title text="Admin"/>

        <Router>
            <SessionGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
            </Routes>
        </Router>
    }
}

/// Installs the navigation guard once, inside router context.
#[component]
fn SessionGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<Config>();
    install_session_guard(config, auth, use_navigate());
}
