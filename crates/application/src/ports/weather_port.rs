//! Weather service port
//!
//! Defines the interface for current-conditions and forecast retrieval.

use async_trait::async_trait;
use domain::{CityName, CurrentConditions, WeatherSample};
#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookups by city name
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the current conditions for a city
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the raw forecast samples for a city, in chronological order
    async fn forecast_samples(
        &self,
        city: &CityName,
    ) -> Result<Vec<WeatherSample>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
