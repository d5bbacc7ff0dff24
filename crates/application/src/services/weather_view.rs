//! Displayed weather state
//!
//! Holds everything the presentation layer renders. The lookup service
//! updates it in place; a failed fetch leaves the matching part untouched.

use domain::{CityName, CurrentConditions, DailySummary, WeatherSample};
use serde::Serialize;

/// State container for one weather view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherView {
    /// City of the most recent submission
    pub city: Option<CityName>,
    /// Current conditions; `None` until a current-conditions fetch succeeds
    pub current: Option<CurrentConditions>,
    /// Leading raw forecast samples for the hourly strip
    pub hourly: Vec<WeatherSample>,
    /// One summary per forecast date
    pub daily: Vec<DailySummary>,
}

impl WeatherView {
    /// Create an empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any weather data has been loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.hourly.is_empty() && self.daily.is_empty()
    }
}
