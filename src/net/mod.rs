//! Networking modules for the backend session handshake.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls against the cookie-session backend and
//! `types` defines the user payload plus the typed verification outcome.

pub mod api;
pub mod types;
