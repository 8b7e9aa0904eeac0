use chrono::Duration;
use serde::Serialize;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenIssuer;

/// Token type tag returned alongside every access token.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Well-formed Argon2id hash with the default cost parameters that no password matches.
/// Verified against when the subject is unknown so that the work done does not depend on it.
const UNKNOWN_SUBJECT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    /// Signed bearer token
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    /// * `token_lifetime` - Lifetime of tokens issued at login
    pub fn new(token_secret: &[u8], token_lifetime: Duration) -> Self {
        Self::with_issuer(TokenIssuer::new(token_secret, token_lifetime))
    }

    /// Create an authenticator around a preconfigured issuer.
    pub fn with_issuer(token_issuer: TokenIssuer) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and mint a token for `subject` with the default lifetime.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to encode in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match, or the stored hash is unusable
    /// * `Token` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AccessToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.mint(subject, None)?;

        Ok(AccessToken::bearer(access_token))
    }

    /// Fail a login for a subject with no stored hash, after the same password work as
    /// [`Authenticator::authenticate`].
    pub fn reject_unknown_subject(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, UNKNOWN_SUBJECT_HASH);
        AuthenticationError::InvalidCredentials
    }

    /// Validate a presented token and return its subject.
    ///
    /// # Errors
    /// * `InvalidOrExpired` - Token is malformed, forged or expired
    pub fn validate_token(&self, token: &str) -> Result<String, TokenError> {
        self.token_issuer.verify(token)
    }
}
