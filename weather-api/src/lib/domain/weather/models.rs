/// Current conditions for a city, reshaped from the provider's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city_name: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub description: String,
    pub icon_url: String,
}
