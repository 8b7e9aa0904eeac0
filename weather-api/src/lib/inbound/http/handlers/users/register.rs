use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::UserData;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UsernameError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    username: String,
    #[serde(default)]
    email: Option<String>,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterUserRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterUserRequestError> {
        let username = Username::new(self.username)?;
        // An empty string is treated as "no email".
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .map(EmailAddress::new)
            .transpose()?;
        Ok(RegisterUserCommand::new(username, email, self.password))
    }
}

impl From<ParseRegisterUserRequestError> for ApiError {
    fn from(err: ParseRegisterUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: Option<&str>) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            email: email.map(str::to_string),
            password: "pw1".to_string(),
        }
    }

    #[test]
    fn test_parse_with_and_without_email() {
        let command = request("alice", Some("a@x.com")).try_into_command().unwrap();
        assert_eq!(command.email.unwrap().as_str(), "a@x.com");

        assert!(request("alice", None).try_into_command().unwrap().email.is_none());
        assert!(request("alice", Some("")).try_into_command().unwrap().email.is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_fields() {
        assert!(matches!(
            request("  ", None).try_into_command(),
            Err(ParseRegisterUserRequestError::Username(_))
        ));
        assert!(matches!(
            request("alice", Some("not-an-email")).try_into_command(),
            Err(ParseRegisterUserRequestError::Email(_))
        ));
    }
}
