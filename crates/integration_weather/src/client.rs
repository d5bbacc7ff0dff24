//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap `weather` and `forecast` endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeather, Forecast};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be created
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API key was missing or rejected
    #[error("Unauthorized: invalid or missing API key")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `appid` query parameter
    pub api_key: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl WeatherConfig {
    /// Configuration for the public endpoint with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data by city name
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn get_current(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    /// Get the 5-day / 3-hour forecast for a city
    async fn get_forecast(&self, city: &str) -> Result<Forecast, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the URL of an API endpoint
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-success status to an error
    fn status_error(status: StatusCode, city: &str) -> WeatherError {
        match status {
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
            StatusCode::NOT_FOUND => WeatherError::CityNotFound(city.to_string()),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }

    /// GET an endpoint for a city and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, city = %city, "Requesting weather data");

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, city));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn get_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        self.get_json("weather", city).await
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let forecast: Forecast = self.get_json("forecast", city).await?;
        debug!(entries = forecast.list.len(), "Fetched forecast");
        Ok(forecast)
    }
}
