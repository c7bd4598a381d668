//! DTOs for the backend session endpoints.
//!
//! DESIGN
//! ======
//! `User` mirrors the `/api/user` payload so serde round-trips stay
//! lossless. `VerifyOutcome` keeps the three verification results apart
//! (authenticated / rejected / transport failure) even though the session
//! store treats both failure arms the same; callers that care can match.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user as returned by the `/api/user` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// ISO 8601 timestamp of email verification, if verified.
    #[serde(default)]
    pub email_verified_at: Option<String>,
    /// ISO 8601 creation timestamp, if exposed by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if exposed by the backend.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Result of one session verification attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The backend recognized the session cookie and returned the user.
    Authenticated(User),
    /// The backend rejected the session (401, or a redirect-to-login 302).
    Unauthenticated,
    /// The request never produced an auth decision: network failure or an
    /// unexpected status.
    TransportError(String),
}

impl VerifyOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The user payload, when authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
