//! Weather data models
//!
//! Mirrors the JSON documents returned by the OpenWeatherMap `weather` and
//! `forecast` endpoints. Only the fields the application reads are modelled;
//! unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// The `main` block: temperatures in Kelvin, pressure in hPa, humidity in %
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Provider condition id (e.g. 500 for light rain)
    pub id: u16,
    /// Condition group (e.g. `Rain`)
    pub main: String,
    /// Condition text (e.g. `light rain`)
    pub description: String,
    /// Icon id (e.g. `10d`)
    pub icon: String,
}

/// The `wind` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s
    pub speed: f64,
    /// Wind direction in degrees
    #[serde(default)]
    pub deg: Option<u16>,
}

/// Response of the `weather` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Observation time, Unix seconds
    pub dt: i64,
    /// Resolved city name
    pub name: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: Option<i32>,
}

impl CurrentWeather {
    /// The first listed condition, which the provider treats as primary
    #[must_use]
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// One 3-hourly entry of the forecast `list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Valid time, Unix seconds
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Probability of precipitation, 0.0 to 1.0
    pub pop: f64,
    /// Valid time as `YYYY-MM-DD hh:mm:ss` UTC
    #[serde(default)]
    pub dt_txt: Option<String>,
}

impl ForecastEntry {
    /// The first listed condition, which the provider treats as primary
    #[must_use]
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// The `city` block of a forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// Response of the `forecast` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Chronological 3-hourly entries, typically 40
    pub list: Vec<ForecastEntry>,
    pub city: ForecastCity,
}
