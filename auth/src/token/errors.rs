use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are deliberately a single variant: callers cannot tell a bad
/// signature from an expired or malformed token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid or expired token")]
    InvalidOrExpired,
}
