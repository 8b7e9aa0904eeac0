use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::weather::errors::WeatherError;
use crate::domain::weather::models::WeatherReport;
use crate::domain::weather::ports::WeatherProvider;
use crate::domain::weather::ports::WeatherServicePort;

/// Pass-through to the configured weather provider.
pub struct WeatherService<WP>
where
    WP: WeatherProvider,
{
    provider: Arc<WP>,
}

impl<WP> WeatherService<WP>
where
    WP: WeatherProvider,
{
    pub fn new(provider: Arc<WP>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<WP> WeatherServicePort for WeatherService<WP>
where
    WP: WeatherProvider,
{
    async fn current_weather(&self, city_name: &str) -> Result<WeatherReport, WeatherError> {
        let city_name = city_name.trim();
        if city_name.is_empty() {
            return Err(WeatherError::EmptyCityName);
        }

        self.provider
            .current_weather(city_name)
            .await
            .inspect_err(|e| tracing::warn!(city = city_name, error = %e, "Weather lookup failed"))
    }
}
