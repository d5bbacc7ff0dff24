//! Per-day forecast summary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WeatherSample;
use crate::value_objects::Kelvin;

/// One aggregated forecast record per calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar date the samples were bucketed into
    pub date: NaiveDate,
    /// First sample seen for this date; its icon and description represent the day
    pub representative: WeatherSample,
    /// Lowest `temperature_min` across the day's samples
    pub temperature_min: Kelvin,
    /// Highest `temperature_max` across the day's samples
    pub temperature_max: Kelvin,
    /// Highest precipitation probability across the day's samples
    pub precipitation_probability: f64,
}

impl DailySummary {
    /// Start a summary from the first sample of a date
    #[must_use]
    pub fn start(date: NaiveDate, sample: &WeatherSample) -> Self {
        Self {
            date,
            representative: sample.clone(),
            temperature_min: sample.temperature_min,
            temperature_max: sample.temperature_max,
            precipitation_probability: sample.precipitation_probability,
        }
    }

    /// Fold a further sample of the same date into the summary
    ///
    /// The representative sample is never replaced.
    pub fn absorb(&mut self, sample: &WeatherSample) {
        self.temperature_min = self.temperature_min.min(sample.temperature_min);
        self.temperature_max = self.temperature_max.max(sample.temperature_max);
        self.precipitation_probability = self
            .precipitation_probability
            .max(sample.precipitation_probability);
    }

    /// Precipitation probability as a whole percentage
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn precipitation_percent(&self) -> u8 {
        (self.precipitation_probability * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Icon of the representative sample
    #[must_use]
    pub fn icon_code(&self) -> &str {
        &self.representative.icon_code
    }

    /// Description of the representative sample
    #[must_use]
    pub fn description(&self) -> &str {
        &self.representative.description
    }
}
