//! HTTP calls for the cookie/CSRF session handshake.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with browser
//! cookies attached to every request. Server-side (SSR): stubs, since the
//! session lives in the browser cookie store.
//!
//! ERROR HANDLING
//! ==============
//! Verification returns a typed [`VerifyOutcome`] so rejection and
//! transport failure stay distinguishable. Login collapses every failure
//! into one generic message; the concrete cause goes to the log only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::VerifyOutcome;
use crate::config::Config;

#[cfg(feature = "hydrate")]
use super::types::User;

/// Name of the CSRF cookie issued by the backend.
pub const CSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header echoing the CSRF cookie value back to the backend.
#[cfg(feature = "hydrate")]
const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// The one error message login surfaces, whatever actually went wrong.
pub const LOGIN_FAILED: &str = "login failed";

#[cfg(any(test, feature = "hydrate"))]
fn classify_failure_status(status: u16) -> VerifyOutcome {
    match status {
        // 401 is the session-expired answer; 302 is the backend redirecting
        // an unauthenticated request to its login route.
        302 | 401 => VerifyOutcome::Unauthenticated,
        _ => VerifyOutcome::TransportError(unexpected_status_message(status)),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn unexpected_status_message(status: u16) -> String {
    format!("unexpected status: {status}")
}

/// Current CSRF token, straight from the browser cookie store.
#[cfg(feature = "hydrate")]
fn csrf_token() -> String {
    crate::util::cookie::read_cookie(CSRF_COOKIE).unwrap_or_default()
}

/// Ask the backend to set the CSRF cookie via `GET /sanctum/csrf-cookie`.
///
/// Must complete before any call that echoes the token back.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend answers
/// with a non-OK status.
pub async fn prime_csrf_cookie(config: &Config) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.api_url("/sanctum/csrf-cookie"))
            .header("Origin", &config.site_base)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(unexpected_status_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Ok(())
    }
}

/// Fetch the current user from `/api/user` and classify the result.
///
/// The CSRF cookie must already be primed; its value is read at call time
/// and echoed in the request header.
pub async fn fetch_current_user(config: &Config) -> VerifyOutcome {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.api_url("/api/user"))
            .header("Origin", &config.site_base)
            .header("Accept", "application/json")
            .header(CSRF_HEADER, &csrf_token())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        let resp = match resp {
            Ok(resp) => resp,
            Err(err) => return VerifyOutcome::TransportError(err.to_string()),
        };
        if !resp.ok() {
            return classify_failure_status(resp.status());
        }
        match resp.json::<User>().await {
            Ok(user) => VerifyOutcome::Authenticated(user),
            Err(err) => VerifyOutcome::TransportError(err.to_string()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        VerifyOutcome::Unauthenticated
    }
}

/// Post credentials to `/login`.
///
/// The backend answers by upgrading the browser session cookie; the user
/// payload still has to be fetched afterwards via [`fetch_current_user`].
///
/// # Errors
///
/// Returns the generic [`LOGIN_FAILED`] message on any failure. Bad
/// credentials and transport problems are indistinguishable to the caller.
pub async fn login(config: &Config, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post(&config.api_url("/login"))
            .header("Origin", &config.site_base)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|err| {
                log::debug!("login request could not be built: {err}");
                LOGIN_FAILED.to_owned()
            })?;
        let resp = request.send().await.map_err(|err| {
            log::debug!("login request failed: {err}");
            LOGIN_FAILED.to_owned()
        })?;
        if !resp.ok() {
            log::debug!("login rejected with status {}", resp.status());
            return Err(LOGIN_FAILED.to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(LOGIN_FAILED.to_owned())
    }
}

/// Post to `/logout` to invalidate the server-side session.
///
/// # Errors
///
/// Returns an error string if the request fails; the caller decides
/// whether that matters.
pub async fn logout(config: &Config) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.api_url("/logout"))
            .header("Origin", &config.site_base)
            .header(CSRF_HEADER, &csrf_token())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(unexpected_status_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Ok(())
    }
}
