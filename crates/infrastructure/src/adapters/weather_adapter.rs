//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CityName, CurrentConditions, Humidity, Kelvin, WeatherSample};
use integration_weather::{
    Condition, CurrentWeather, ForecastEntry, OpenWeatherMapClient, WeatherClient, WeatherConfig,
    WeatherError,
};
use tracing::{debug, instrument};

use crate::config::WeatherAppConfig;

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create from the application configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set, or an internal
    /// error if the HTTP client fails to initialize.
    pub fn from_app_config(config: &WeatherAppConfig) -> Result<Self, ApplicationError> {
        let client_config = config.to_client_config().ok_or_else(|| {
            ApplicationError::Configuration("OpenWeatherMap API key is not set".into())
        })?;
        Self::with_config(client_config)
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::CityNotFound(city) => ApplicationError::CityNotFound(city),
            WeatherError::Unauthorized => {
                ApplicationError::Unauthorized("invalid or missing API key".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::RequestFailed(e) | WeatherError::ServiceUnavailable(e) => {
                ApplicationError::ExternalService(e)
            },
            WeatherError::ConnectionFailed(e) | WeatherError::ParseError(e) => {
                ApplicationError::Internal(e)
            },
        }
    }

    /// Icon and description of the primary condition, empty when absent
    fn condition_parts(condition: Option<&Condition>) -> (String, String) {
        condition.map_or_else(
            || (String::new(), String::new()),
            |c| (c.icon.clone(), c.description.clone()),
        )
    }

    /// Convert the provider's current weather to domain current conditions
    fn map_current(current: CurrentWeather) -> CurrentConditions {
        let (icon_code, description) = Self::condition_parts(current.primary_condition());
        CurrentConditions {
            city: current.name,
            observed_at: current.dt,
            temperature: Kelvin::new(current.main.temp),
            feels_like: Kelvin::new(current.main.feels_like),
            humidity: Humidity::clamped(current.main.humidity),
            pressure_hpa: current.main.pressure,
            wind_speed_mps: current.wind.speed,
            icon_code,
            description,
        }
    }

    /// Convert a provider forecast entry to a domain sample
    fn map_entry(entry: &ForecastEntry) -> WeatherSample {
        let (icon_code, description) = Self::condition_parts(entry.primary_condition());
        WeatherSample {
            timestamp: entry.dt,
            temperature: Kelvin::new(entry.main.temp),
            temperature_min: Kelvin::new(entry.main.temp_min),
            temperature_max: Kelvin::new(entry.main.temp_max),
            precipitation_probability: entry.pop,
            icon_code,
            description,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip_all, fields(city = %city))]
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self
            .client
            .get_current(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.main.temp,
                    resolved = %current.name,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_current)
    }

    #[instrument(skip_all, fields(city = %city))]
    async fn forecast_samples(
        &self,
        city: &CityName,
    ) -> Result<Vec<WeatherSample>, ApplicationError> {
        let result = self
            .client
            .get_forecast(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(entries = forecast.list.len(), "Retrieved forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result.map(|forecast| forecast.list.iter().map(Self::map_entry).collect())
    }
}

#[cfg(test)]
mod tests {
    use integration_weather::{MainReadings, Wind};
    use secrecy::SecretString;

    use super::*;

    fn readings() -> MainReadings {
        MainReadings {
            temp: 291.15,
            feels_like: 290.0,
            temp_min: 289.0,
            temp_max: 293.5,
            pressure: 1015,
            humidity: 64,
        }
    }

    fn rain() -> Condition {
        Condition {
            id: 500,
            main: "Rain".to_string(),
            description: "light rain".to_string(),
            icon: "10d".to_string(),
        }
    }

    #[test]
    fn adapter_creation() {
        let adapter = WeatherAdapter::with_config(WeatherConfig::new("key"));
        assert!(adapter.is_ok());
    }

    #[test]
    fn from_app_config_requires_api_key() {
        let result = WeatherAdapter::from_app_config(&WeatherAppConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));

        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("key")),
            ..Default::default()
        };
        assert!(WeatherAdapter::from_app_config(&config).is_ok());
    }

    #[test]
    fn debug_output() {
        let adapter = WeatherAdapter::with_config(WeatherConfig::new("key")).unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("WeatherAdapter"));
    }

    #[test]
    fn map_error_variants() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::CityNotFound("Atlantis".into())),
            ApplicationError::CityNotFound(c) if c == "Atlantis"
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::Unauthorized),
            ApplicationError::Unauthorized(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::RequestFailed("timeout".into())),
            ApplicationError::ExternalService(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ServiceUnavailable("HTTP 503".into())),
            ApplicationError::ExternalService(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ParseError("eof".into())),
            ApplicationError::Internal(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ConnectionFailed("tls".into())),
            ApplicationError::Internal(_)
        ));
    }

    #[test]
    fn map_current_copies_readings() {
        let current = CurrentWeather {
            dt: 1_700_000_000,
            name: "Lisbon".to_string(),
            main: readings(),
            weather: vec![rain()],
            wind: Wind {
                speed: 4.2,
                deg: Some(90),
            },
            timezone: Some(0),
        };

        let conditions = WeatherAdapter::map_current(current);

        assert_eq!(conditions.city, "Lisbon");
        assert_eq!(conditions.observed_at, 1_700_000_000);
        assert_eq!(conditions.temperature, Kelvin::new(291.15));
        assert_eq!(conditions.feels_like, Kelvin::new(290.0));
        assert_eq!(conditions.humidity.value(), 64);
        assert_eq!(conditions.pressure_hpa, 1015);
        assert!((conditions.wind_speed_mps - 4.2).abs() < f64::EPSILON);
        assert_eq!(conditions.icon_code, "10d");
        assert_eq!(conditions.description, "light rain");
    }

    #[test]
    fn map_current_clamps_humidity() {
        let mut main = readings();
        main.humidity = 140;
        let current = CurrentWeather {
            dt: 0,
            name: "Wet".to_string(),
            main,
            weather: vec![],
            wind: Wind {
                speed: 0.0,
                deg: None,
            },
            timezone: None,
        };

        let conditions = WeatherAdapter::map_current(current);
        assert_eq!(conditions.humidity.value(), 100);
        assert!(conditions.icon_code.is_empty());
    }

    #[test]
    fn map_entry_builds_sample() {
        let entry = ForecastEntry {
            dt: 1_717_200_000,
            main: readings(),
            weather: vec![rain()],
            pop: 0.35,
            dt_txt: None,
        };

        let sample = WeatherAdapter::map_entry(&entry);

        assert_eq!(sample.timestamp, 1_717_200_000);
        assert_eq!(sample.temperature, Kelvin::new(291.15));
        assert_eq!(sample.temperature_min, Kelvin::new(289.0));
        assert_eq!(sample.temperature_max, Kelvin::new(293.5));
        assert!((sample.precipitation_probability - 0.35).abs() < f64::EPSILON);
        assert_eq!(sample.icon_code, "10d");
        assert_eq!(sample.description, "light rain");
    }

    #[test]
    fn map_entry_without_condition_has_empty_text() {
        let entry = ForecastEntry {
            dt: 1,
            main: readings(),
            weather: vec![],
            pop: 0.0,
            dt_txt: None,
        };

        let sample = WeatherAdapter::map_entry(&entry);
        assert!(sample.icon_code.is_empty());
        assert!(sample.description.is_empty());
    }
}
