//! Session manager: the three operations against the cookie-session backend.
//!
//! Each operation runs its HTTP calls strictly in sequence; the CSRF
//! cookie must be set by the backend before its value can be echoed back.

use leptos::prelude::*;

use super::auth::AuthState;
use crate::config::Config;
use crate::net::api;
use crate::net::types::VerifyOutcome;

/// Verify the browser session against the backend.
///
/// Primes the CSRF cookie, fetches `/api/user`, folds the outcome into the
/// shared state, and reports whether the session is live. On any failure
/// the stored user is cleared.
pub async fn verify_session(config: &Config, auth: RwSignal<AuthState>) -> bool {
    auth.update(|state| state.loading = true);

    let outcome = match api::prime_csrf_cookie(config).await {
        Ok(()) => api::fetch_current_user(config).await,
        Err(err) => VerifyOutcome::TransportError(err),
    };
    if let VerifyOutcome::TransportError(reason) = &outcome {
        log::debug!("session verification failed: {reason}");
    }

    let authenticated = outcome.is_authenticated();
    auth.update(|state| {
        state.apply_verify(&outcome);
        state.loading = false;
    });
    authenticated
}

/// Log in with email and password, then verify to populate the state.
///
/// # Errors
///
/// Returns the generic login failure message if CSRF priming or the
/// credential POST fails; the shared state is left untouched in that case
/// since verification never ran.
pub async fn login(
    config: &Config,
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<bool, String> {
    api::prime_csrf_cookie(config).await.map_err(|err| {
        log::debug!("csrf priming failed before login: {err}");
        api::LOGIN_FAILED.to_owned()
    })?;
    api::login(config, email, password).await?;
    Ok(verify_session(config, auth).await)
}

/// Log out: invalidate the server session, clear local state, and send the
/// browser to the login page.
///
/// A failed logout request is logged and otherwise ignored; the local
/// session ends either way.
pub async fn logout(config: &Config, auth: RwSignal<AuthState>) {
    if let Err(err) = api::logout(config).await {
        log::warn!("logout request failed, clearing local session anyway: {err}");
    }
    auth.update(AuthState::clear);
    redirect_to_login();
}

fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::util::auth::LOGIN_PATH);
        }
    }
}
