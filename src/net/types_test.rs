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
// User payload decoding
// =============================================================

#[test]
fn user_decodes_full_backend_payload() {
    let json = r#"{
        "id": 7,
        "name": "Alice",
        "email": "alice@example.com",
        "email_verified_at": "2025-01-04T10:00:00.000000Z",
        "created_at": "2024-12-01T09:30:00.000000Z",
        "updated_at": "2025-01-04T10:00:00.000000Z"
    }"#;
    let user: User = serde_json::from_str(json).expect("payload should decode");
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(user.email_verified_at.is_some());
}

#[test]
fn user_decodes_without_optional_timestamps() {
    let json = r#"{"id": 3, "name": "Bob", "email": "bob@example.com"}"#;
    let user: User = serde_json::from_str(json).expect("payload should decode");
    assert_eq!(user.id, 3);
    assert!(user.email_verified_at.is_none());
    assert!(user.created_at.is_none());
}

#[test]
fn user_decodes_float_shaped_id() {
    let json = r#"{"id": 3.0, "name": "Bob", "email": "bob@example.com"}"#;
    let user: User = serde_json::from_str(json).expect("payload should decode");
    assert_eq!(user.id, 3);
}

#[test]
fn user_rejects_fractional_id() {
    let json = r#"{"id": 3.5, "name": "Bob", "email": "bob@example.com"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}

// =============================================================
// VerifyOutcome
// =============================================================

#[test]
fn authenticated_outcome_exposes_user() {
    let outcome = VerifyOutcome::Authenticated(sample_user());
    assert!(outcome.is_authenticated());
    assert_eq!(outcome.user().map(|u| u.name.as_str()), Some("Alice"));
}

#[test]
fn unauthenticated_outcome_has_no_user() {
    let outcome = VerifyOutcome::Unauthenticated;
    assert!(!outcome.is_authenticated());
    assert!(outcome.user().is_none());
}

#[test]
fn transport_error_outcome_has_no_user() {
    let outcome = VerifyOutcome::TransportError("network error".to_owned());
    assert!(!outcome.is_authenticated());
    assert!(outcome.user().is_none());
}
