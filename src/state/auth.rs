//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide as an `RwSignal<AuthState>` context value. Only the
//! operations in [`crate::state::session`] write it; route guards and
//! user-aware components read it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{User, VerifyOutcome};

/// Authentication state tracking the current user and loading status.
///
/// `user` is `None` exactly when the most recent verify/login attempt
/// failed, or when no attempt has succeeded yet.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Fold one verification outcome into the state.
    ///
    /// Both failure arms clear the user; a stale payload must never
    /// survive a failed verification.
    pub fn apply_verify(&mut self, outcome: &VerifyOutcome) {
        match outcome {
            VerifyOutcome::Authenticated(user) => self.user = Some(user.clone()),
            VerifyOutcome::Unauthenticated | VerifyOutcome::TransportError(_) => self.user = None,
        }
    }

    /// Drop the current user, e.g. on logout.
    pub fn clear(&mut self) {
        self.user = None;
    }
}
