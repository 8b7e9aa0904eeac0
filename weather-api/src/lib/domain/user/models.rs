use std::fmt;
use std::str::FromStr;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UsernameError;

/// Registered identity as held by the credential store.
///
/// Created at registration and never mutated afterwards. `password_hash` is an opaque
/// PHC string and never leaves the domain layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub password_hash: String,
}

/// Database-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Any non-blank string of at most 255 characters, the width of the `users.username` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub const MAX_LENGTH: usize = 255;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace only
    /// * `TooLong` - Username longer than 255 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if username.trim().is_empty() {
            Err(UsernameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username))
        }
    }

    /// Wrap a username read back from the store without re-validating it.
    pub(crate) fn from_stored(username: String) -> Self {
        Self(username)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Wrap an address read back from the store without re-validating it.
    pub(crate) fn from_stored(email: String) -> Self {
        Self(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub password: String,
}

impl RegisterUserCommand {
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Optional validated email address
    /// * `password` - Plain text password (hashed by the service, never stored as is)
    pub fn new(username: Username, email: Option<EmailAddress>, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// User row about to be inserted; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let username = Username::new("alice_01-x".to_string()).unwrap();
        assert_eq!(username.as_str(), "alice_01-x");
    }

    #[test]
    fn test_username_accepts_short_and_punctuated_names() {
        assert_eq!(Username::new("al".to_string()).unwrap().as_str(), "al");
        assert_eq!(Username::new("x".to_string()).unwrap().as_str(), "x");
        assert_eq!(
            Username::new("john.doe".to_string()).unwrap().as_str(),
            "john.doe"
        );
        assert!(Username::new("alice smith".to_string()).is_ok());
        assert!(Username::new("アリス".to_string()).is_ok());
    }

    #[test]
    fn test_username_blank() {
        assert_eq!(Username::new(String::new()), Err(UsernameError::Empty));
        assert_eq!(Username::new("   ".to_string()), Err(UsernameError::Empty));
    }

    #[test]
    fn test_username_too_long() {
        assert!(Username::new("a".repeat(255)).is_ok());
        assert_eq!(
            Username::new("a".repeat(256)),
            Err(UsernameError::TooLong {
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn test_email() {
        assert!(EmailAddress::new("a@x.com".to_string()).is_ok());
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }
}
