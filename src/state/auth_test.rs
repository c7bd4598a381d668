use super::*;

fn sample_user() -> User {
    User {
        id: 1,
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        email_verified_at: None,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn default_state_is_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Verify transitions
// =============================================================

#[test]
fn authenticated_outcome_sets_user() {
    let mut state = AuthState::default();
    state.apply_verify(&VerifyOutcome::Authenticated(sample_user()));
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
}

#[test]
fn unauthenticated_outcome_clears_user() {
    let mut state = AuthState { user: Some(sample_user()), loading: false };
    state.apply_verify(&VerifyOutcome::Unauthenticated);
    assert!(state.user.is_none());
}

#[test]
fn transport_error_clears_user() {
    // A stale payload must not outlive a failed verification.
    let mut state = AuthState { user: Some(sample_user()), loading: false };
    state.apply_verify(&VerifyOutcome::TransportError("network error".to_owned()));
    assert!(state.user.is_none());
}

#[test]
fn repeated_verify_tracks_latest_outcome() {
    let mut state = AuthState::default();
    state.apply_verify(&VerifyOutcome::Authenticated(sample_user()));
    state.apply_verify(&VerifyOutcome::Unauthenticated);
    assert!(!state.is_authenticated());
    state.apply_verify(&VerifyOutcome::Authenticated(sample_user()));
    assert!(state.is_authenticated());
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_drops_user() {
    let mut state = AuthState { user: Some(sample_user()), loading: false };
    state.clear();
    assert!(state.user.is_none());
}

#[test]
fn clear_on_empty_state_is_a_no_op() {
    let mut state = AuthState::default();
    state.clear();
    assert!(state.user.is_none());
}
