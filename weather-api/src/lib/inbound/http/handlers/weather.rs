use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::weather::models::WeatherReport;
use crate::domain::weather::ports::WeatherServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_weather(
    State(state): State<AppState>,
    Path(city_name): Path<String>,
) -> Result<ApiSuccess<WeatherData>, ApiError> {
    state
        .weather_service
        .current_weather(&city_name)
        .await
        .map_err(ApiError::from)
        .map(|report| ApiSuccess::new(StatusCode::OK, report.into()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherData {
    pub city_name: String,
    pub temperature: f64,
    pub description: String,
    pub icon_url: String,
}

impl From<WeatherReport> for WeatherData {
    fn from(report: WeatherReport) -> Self {
        Self {
            city_name: report.city_name,
            temperature: report.temperature,
            description: report.description,
            icon_url: report.icon_url,
        }
    }
}
