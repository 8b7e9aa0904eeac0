use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::UserData;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    // Nothing invalid can have been registered, so it cannot be found either.
    let username = Username::new(username.clone())
        .map_err(|_| ApiError::NotFound(format!("User not found: {}", username)))?;

    state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
