//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` holds the plain state model and its transitions; `session` wires
//! that model to the HTTP handshake. The split keeps the transitions
//! testable without a browser.

pub mod auth;
pub mod session;
