//! Authentication utilities library
//!
//! Provides the credential primitives used by the backend:
//! - Password hashing (Argon2id)
//! - Signed, time-limited access tokens (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = issuer.mint("alice", None).unwrap();
//! assert_eq!(issuer.verify(&token).unwrap(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and mint token
//! let result = auth.authenticate("password123", &hash, "alice").unwrap();
//! assert_eq!(result.token_type, "bearer");
//!
//! // Validate token
//! let subject = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(subject, "alice");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AccessToken;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::BEARER_TOKEN_TYPE;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Clock;
pub use token::SystemClock;
pub use token::TokenClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::DEFAULT_TOKEN_LIFETIME_MINUTES;
