use async_trait::async_trait;

use crate::domain::weather::errors::WeatherError;
use crate::domain::weather::models::WeatherReport;

#[async_trait]
pub trait WeatherServicePort: Send + Sync + 'static {
    /// Current weather for `city_name`.
    ///
    /// # Errors
    /// * `EmptyCityName` - Blank city name
    /// * `MissingApiKey` - Provider credentials not configured
    /// * `CityNotFound` - Provider does not know the city
    /// * `Upstream` / `InvalidResponse` - Provider unreachable or answered garbage
    async fn current_weather(&self, city_name: &str) -> Result<WeatherReport, WeatherError>;
}

/// Third-party weather source.
#[async_trait]
pub trait WeatherProvider: Send + Sync + 'static {
    async fn current_weather(&self, city_name: &str) -> Result<WeatherReport, WeatherError>;
}
