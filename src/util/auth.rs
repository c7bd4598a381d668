//! Session route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except the login page requires a live backend session. The
//! guard re-verifies on each navigation and redirects both directions:
//! signed-out users land on the login page, signed-in users are bounced
//! off it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::config::Config;
use crate::state::auth::AuthState;

/// Path of the login page, the only route reachable without a session.
pub const LOGIN_PATH: &str = "/admin/login";

/// Landing page for authenticated users.
pub const HOME_PATH: &str = "/admin";

/// Decide where a navigation should be redirected, if anywhere.
///
/// An unauthenticated visit to the login page stays put, which is what
/// breaks the redirect loop.
pub fn guard_redirect(authenticated: bool, path: &str) -> Option<&'static str> {
    if !authenticated && path != LOGIN_PATH {
        return Some(LOGIN_PATH);
    }
    if authenticated && path == LOGIN_PATH {
        return Some(HOME_PATH);
    }
    None
}

/// Re-verify the session on every route change and redirect accordingly.
///
/// Must be called inside a `<Router>` so the reactive location is
/// available. Each navigation triggers a fresh backend verification; the
/// guard never trusts a cached result.
pub fn install_session_guard<F>(config: Config, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let navigate = navigate.clone();
        let config = config.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let authenticated = crate::state::session::verify_session(&config, auth).await;
            if let Some(target) = guard_redirect(authenticated, &path) {
                navigate(target, NavigateOptions::default());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, navigate, config, auth);
        }
    });
}
