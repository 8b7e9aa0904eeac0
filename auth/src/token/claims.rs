use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried inside an access token.
///
/// Constructed at login, signed into the token string and discarded; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (username)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
}

impl TokenClaims {
    /// Build claims for `subject` valid from `issued_at` for `lifetime`.
    ///
    /// An expiry beyond the representable range saturates at the latest instant.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            sub: subject.into(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// A token is expired from its `exp` second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
