//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: OpenWeatherMap connection settings
//! - `forecast`: hourly strip length and day bucketing zone
//!
//! Logging settings live with the telemetry module.
//!
//! Sources are layered, later ones winning: built-in defaults, then an
//! optional TOML file (`weatheryze.toml` in the working directory, or an
//! explicit path), then `WEATHERYZE_*` environment variables using `__`
//! between section and key (e.g. `WEATHERYZE_WEATHER__API_KEY`).

mod forecast;
mod weather;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::telemetry::TelemetryConfig;

pub use forecast::ForecastAppConfig;
pub use weather::WeatherAppConfig;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "WEATHERYZE";

/// Name of the optional configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "weatheryze";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No OpenWeatherMap API key was configured
    #[error("Missing OpenWeatherMap API key: set weather.api_key or WEATHERYZE_WEATHER__API_KEY")]
    MissingApiKey,

    /// A value is present but unusable
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidValue {
        /// Dotted configuration key
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Application environment (development or production)
///
/// Production refuses plain-HTTP weather endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// OpenWeatherMap settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Forecast presentation settings
    #[serde(default)]
    pub forecast: ForecastAppConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// When `path` is given the file must exist; otherwise `weatheryze.toml`
    /// is read from the working directory if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Self::env_source())
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                config::File::from(path)
            },
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check that the configuration can serve lookups
    ///
    /// Run before any request so that a missing key surfaces as a
    /// configuration error rather than a rejected HTTP call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.api_key_str().is_none() {
            return Err(ConfigError::MissingApiKey);
        }

        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "weather.timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.forecast.hourly_samples == 0 {
            return Err(ConfigError::InvalidValue {
                key: "forecast.hourly_samples",
                reason: "must be at least 1".to_string(),
            });
        }

        self.forecast
            .zone()
            .map_err(|e| ConfigError::InvalidValue {
                key: "forecast.timezone",
                reason: e.to_string(),
            })?;

        if !self.weather.base_url.starts_with("https://") {
            if self.environment == Environment::Production {
                return Err(ConfigError::InvalidValue {
                    key: "weather.base_url",
                    reason: "production requires an https endpoint".to_string(),
                });
            }
            warn!(base_url = %self.weather.base_url, "Weather endpoint is not using https");
        }

        Ok(())
    }
}
