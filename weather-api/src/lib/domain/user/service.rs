use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessToken;
use auth::Authenticator;

use crate::domain::page::Page;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Ties the credential store to password hashing and token issuance.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hasher and token issuer, configured with the signing secret
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            tracing::info!(username = %command.username, "Registration rejected: duplicate username");
            return Err(UserError::DuplicateIdentity);
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, UserError> {
        // A username that could never have been registered is just an unknown user.
        let user = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            return Err(self
                .authenticator
                .reject_unknown_subject(password)
                .into());
        };

        let token = self
            .authenticator
            .authenticate(password, &user.password_hash, user.username.as_str())?;

        tracing::info!(user_id = %user.id, "Access token issued");

        Ok(token)
    }

    async fn authenticate_token(&self, token: &str) -> Result<User, UserError> {
        let subject = self
            .authenticator
            .validate_token(token)
            .map_err(|_| UserError::InvalidOrExpiredToken)?;

        let username = Username::new(subject).map_err(|_| UserError::InvalidOrExpiredToken)?;

        self.repository
            .find_by_username(&username)
            .await?
            .ok_or(UserError::InvalidOrExpiredToken)
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFound(username.to_string()))
    }

    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError> {
        self.repository.list(page.normalized()).await
    }
}
