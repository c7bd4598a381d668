//! Endpoint configuration for the auth backend.
//!
//! DESIGN
//! ======
//! WASM has no process environment at runtime, so both base URLs are
//! resolved at compile time via `option_env!` and injected once as a
//! context value. Consumers receive the `Config` by injection rather than
//! reading ambient globals, so tests can construct their own.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URLs for the auth backend and for this site itself.
///
/// `api_base` is where the session backend lives; `site_base` is the
/// origin this SPA is served from and is echoed in the `Origin` header of
/// every backend request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub site_base: String,
}

impl Config {
    pub fn new(api_base: impl Into<String>, site_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into(), site_base: site_base.into() }
    }

    /// Resolve configuration from the build environment.
    ///
    /// `API_BASE_URL` and `SITE_BASE_URL` are baked in at compile time;
    /// local development defaults apply when they are unset.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("API_BASE_URL").unwrap_or("http://localhost:8000"),
            option_env!("SITE_BASE_URL").unwrap_or("http://localhost:3000"),
        )
    }

    /// Join a path onto the API base without doubling slashes.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
