//! Current weather conditions for a city

use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, Kelvin};

/// Observed weather at a city right now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as resolved by the provider
    pub city: String,
    /// Observation time, seconds since the Unix epoch
    pub observed_at: i64,
    pub temperature: Kelvin,
    pub feels_like: Kelvin,
    pub humidity: Humidity,
    /// Sea-level pressure in hPa
    pub pressure_hpa: u32,
    /// Wind speed in metres per second
    pub wind_speed_mps: f64,
    pub icon_code: String,
    pub description: String,
}
