use axum::http::StatusCode;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;

const GREETING: &str = "ハロー、先生！FastAPIバックエンドが起動しておるぞ！";

pub async fn root() -> Result<ApiSuccess<Greeting>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        Greeting {
            message: GREETING.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: String,
}
