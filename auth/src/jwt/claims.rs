use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token payload.
///
/// Carries only the subject login name and the validity window;
/// roles and blocked state are always read from the directory at use time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (login name of the account)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` valid for `ttl` starting now.
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        Self::issued_at(subject, Utc::now(), ttl)
    }

    /// Create claims with an explicit issue instant.
    ///
    /// # Arguments
    /// * `subject` - Login name the token asserts
    /// * `now` - Issue instant
    /// * `ttl` - Validity period; a negative value yields an already expired token
    pub fn issued_at(subject: impl ToString, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
