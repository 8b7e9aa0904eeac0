use thiserror::Error;

/// Error for weather lookups
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("City name cannot be empty")]
    EmptyCityName,

    #[error("Weather API key is not configured")]
    MissingApiKey,

    #[error("Weather for city '{0}' not found")]
    CityNotFound(String),

    #[error("Weather provider request failed: {0}")]
    Upstream(String),

    #[error("Weather provider returned an unexpected payload: {0}")]
    InvalidResponse(String),
}
