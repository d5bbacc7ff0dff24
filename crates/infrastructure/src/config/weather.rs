//! OpenWeatherMap connection settings.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherAppConfig {
    /// Get the API key if one is configured and non-blank
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Convert to `integration_weather`'s `WeatherConfig`
    ///
    /// Returns `None` when no API key is configured.
    #[must_use]
    pub fn to_client_config(&self) -> Option<integration_weather::WeatherConfig> {
        self.api_key_str()
            .map(|key| integration_weather::WeatherConfig {
                base_url: self.base_url.clone(),
                api_key: key.to_string(),
                timeout_secs: self.timeout_secs,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = WeatherAppConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("   ")),
            ..Default::default()
        };
        assert!(config.api_key_str().is_none());
        assert!(config.to_client_config().is_none());
    }

    #[test]
    fn client_config_carries_all_settings() {
        let config = WeatherAppConfig {
            base_url: "http://localhost:8080".to_string(),
            api_key: Some(SecretString::from("abc123")),
            timeout_secs: 5,
        };

        let client = config.to_client_config().unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.api_key, "abc123");
        assert_eq!(client.timeout_secs, 5);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn serialization_skips_api_key() {
        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("api_key"));
    }
}
