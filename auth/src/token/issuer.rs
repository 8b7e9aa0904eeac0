use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::TokenError;

/// Lifetime, in minutes, applied when the caller does not ask for one.
pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 30;

/// Mints and verifies signed, time-limited access tokens.
///
/// Tokens are HS256 JWTs over [`TokenClaims`], signed with a single secret that is
/// injected at construction. There is one trust domain: whoever holds the secret can both
/// mint and verify.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`.
    ///
    /// # Arguments
    /// * `secret` - HMAC key; should be at least 32 bytes for HS256
    /// * `default_lifetime` - Lifetime used by [`TokenIssuer::mint`] when none is given
    pub fn new(secret: &[u8], default_lifetime: Duration) -> Self {
        Self::with_clock(secret, default_lifetime, Arc::new(SystemClock))
    }

    /// Create an issuer reading time from `clock`.
    pub fn with_clock(secret: &[u8], default_lifetime: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            default_lifetime,
            clock,
        }
    }

    /// Mint a token for `subject` expiring `lifetime` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn mint(&self, subject: &str, lifetime: Option<Duration>) -> Result<String, TokenError> {
        let claims = TokenClaims::new(
            subject,
            self.clock.now(),
            lifetime.unwrap_or(self.default_lifetime),
        );

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and expiry of `token` and return its subject.
    ///
    /// Every failure, structural, cryptographic or temporal, is reported as
    /// `InvalidOrExpired`.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                TokenError::InvalidOrExpired
            })?
            .claims;

        // Expiry is checked here against the injected clock, without leeway.
        if claims.is_expired(self.clock.now().timestamp()) {
            tracing::debug!(exp = claims.exp, "Token rejected: expired");
            return Err(TokenError::InvalidOrExpired);
        }

        Ok(claims.sub)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["exp".to_string(), "sub".to_string()]);
        validation
    }
}
