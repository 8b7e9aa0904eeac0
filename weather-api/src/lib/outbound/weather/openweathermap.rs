use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::domain::weather::errors::WeatherError;
use crate::domain::weather::models::WeatherReport;
use crate::domain::weather::ports::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const ICON_URL_BASE: &str = "http://openweathermap.org/img/wn";

/// OpenWeatherMap current-weather client.
///
/// Requests metric units with Japanese descriptions and reshapes the answer into a
/// [`WeatherReport`].
pub struct OpenWeatherMapClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherMapClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .user_agent(concat!("weather-api/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        tracing::info!(
            base_url = %config.base_url,
            api_key_configured = config.api_key.is_some(),
            "Weather provider client created"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherPayload {
    main: MainSection,
    weather: Vec<ConditionSection>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    description: String,
    icon: String,
}

/// OpenWeatherMap sometimes reports errors with HTTP 200 and a `cod` field,
/// as either a string or a number.
fn payload_status(payload: &serde_json::Value) -> Option<String> {
    match payload.get("cod")? {
        serde_json::Value::String(code) => Some(code.clone()),
        serde_json::Value::Number(code) => Some(code.to_string()),
        _ => None,
    }
}

fn report_from_payload(
    city_name: &str,
    payload: serde_json::Value,
) -> Result<WeatherReport, WeatherError> {
    if payload_status(&payload).as_deref() == Some("404") {
        return Err(WeatherError::CityNotFound(city_name.to_string()));
    }

    let payload: CurrentWeatherPayload = serde_json::from_value(payload)
        .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

    let condition = payload
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::InvalidResponse("empty weather list".to_string()))?;

    Ok(WeatherReport {
        city_name: city_name.to_string(),
        temperature: payload.main.temp,
        description: condition.description,
        icon_url: format!("{}/{}@2x.png", ICON_URL_BASE, condition.icon),
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    async fn current_weather(&self, city_name: &str) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let response = self
            .client
            .get(format!("{}{}", self.base_url, CURRENT_WEATHER_PATH))
            .query(&[
                ("q", city_name),
                ("appid", api_key),
                ("units", "metric"),
                ("lang", "ja"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Upstream(e.without_url().to_string()))?;

        let status = response.status();
        tracing::debug!(city = city_name, status = status.as_u16(), "Weather provider responded");

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(city_name.to_string()));
        }
        if !status.is_success() {
            return Err(WeatherError::Upstream(format!(
                "provider answered HTTP {}",
                status.as_u16()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.without_url().to_string()))?;

        report_from_payload(city_name, payload)
    }
}
