use auth::AccessToken;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// OAuth2 password grant: `application/x-www-form-urlencoded` username and password.
///
/// The token response is the bare `{access_token, token_type}` object of RFC 6749 §5.1;
/// failures keep the usual error envelope.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginRequestBody>,
) -> Result<(StatusCode, Json<AccessToken>), ApiError> {
    state
        .user_service
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|token| (StatusCode::OK, Json(token)))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
