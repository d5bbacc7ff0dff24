//! A single timestamped forecast entry

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Kelvin;

/// One forecast data point at a fixed valid time
///
/// The feed delivers these at 3-hour intervals, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Valid time, seconds since the Unix epoch
    pub timestamp: i64,
    /// Point temperature at the valid time
    pub temperature: Kelvin,
    /// Minimum temperature for the sample window
    pub temperature_min: Kelvin,
    /// Maximum temperature for the sample window
    pub temperature_max: Kelvin,
    /// Probability of precipitation, 0.0 to 1.0
    pub precipitation_probability: f64,
    /// Provider icon identifier (e.g. `10d`)
    pub icon_code: String,
    /// Provider sky condition text (e.g. `light rain`)
    pub description: String,
}

impl WeatherSample {
    /// Check that every numeric field is usable for aggregation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        let temperatures = [
            ("temperature", self.temperature),
            ("temperature_min", self.temperature_min),
            ("temperature_max", self.temperature_max),
        ];
        for (field, value) in temperatures {
            if !value.is_finite() {
                return Err(DomainError::invalid_input(format!(
                    "sample at {} has non-finite {field}",
                    self.timestamp
                )));
            }
        }

        let pop = self.precipitation_probability;
        if !pop.is_finite() || !(0.0..=1.0).contains(&pop) {
            return Err(DomainError::invalid_input(format!(
                "sample at {} has precipitation_probability {pop} outside [0, 1]",
                self.timestamp
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherSample {
        WeatherSample {
            timestamp: 1_700_000_000,
            temperature: Kelvin::new(285.0),
            temperature_min: Kelvin::new(283.0),
            temperature_max: Kelvin::new(287.0),
            precipitation_probability: 0.25,
            icon_code: "04d".to_string(),
            description: "broken clouds".to_string(),
        }
    }

    #[test]
    fn valid_sample_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn nan_temperature_rejected() {
        let mut s = sample();
        s.temperature_min = Kelvin::new(f64::NAN);
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("temperature_min"));
    }

    #[test]
    fn infinite_max_rejected() {
        let mut s = sample();
        s.temperature_max = Kelvin::new(f64::INFINITY);
        assert!(matches!(s.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn probability_bounds() {
        let mut s = sample();
        s.precipitation_probability = 0.0;
        assert!(s.validate().is_ok());
        s.precipitation_probability = 1.0;
        assert!(s.validate().is_ok());
        s.precipitation_probability = 1.01;
        assert!(s.validate().is_err());
        s.precipitation_probability = -0.1;
        assert!(s.validate().is_err());
        s.precipitation_probability = f64::NAN;
        assert!(s.validate().is_err());
    }
}
