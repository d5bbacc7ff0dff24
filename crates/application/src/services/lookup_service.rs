//! City weather lookup use case
//!
//! One submission issues the current-conditions and forecast requests
//! concurrently, folds the forecast into daily summaries and updates the
//! [`WeatherView`]. Each request succeeds or fails on its own.

use std::sync::Arc;

use domain::{BucketingZone, CityName, aggregate_daily};
use tracing::{debug, error, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{Notification, NotifierPort, WeatherPort};
use crate::services::WeatherView;

/// Number of raw forecast samples shown in the hourly strip
pub const DEFAULT_HOURLY_SAMPLES: usize = 9;

/// Message shown after current conditions load
pub const CURRENT_SUCCESS_MESSAGE: &str = "Weather data fetched successfully!";
/// Message shown when current conditions cannot be loaded
pub const CURRENT_FAILURE_MESSAGE: &str =
    "Failed to fetch weather data. Please check the location entered.";
/// Message shown when the forecast cannot be loaded or summarised
pub const FORECAST_FAILURE_MESSAGE: &str = "Failed to fetch forecast data.";

/// Configuration for the lookup service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupConfig {
    /// How many leading forecast samples make up the hourly strip
    pub hourly_samples: usize,
    /// Zone used to assign forecast samples to calendar dates
    pub zone: BucketingZone,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            hourly_samples: DEFAULT_HOURLY_SAMPLES,
            zone: BucketingZone::Local,
        }
    }
}

/// Result of one submission
#[derive(Debug, Default)]
pub struct LookupOutcome {
    /// Set when the current-conditions request failed
    pub current_error: Option<ApplicationError>,
    /// Set when the forecast request or its aggregation failed
    pub forecast_error: Option<ApplicationError>,
}

impl LookupOutcome {
    /// Whether current conditions were loaded
    #[must_use]
    pub const fn current_succeeded(&self) -> bool {
        self.current_error.is_none()
    }

    /// Whether both parts of the lookup succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.current_error.is_none() && self.forecast_error.is_none()
    }
}

/// Service that performs city weather lookups
pub struct LookupService {
    weather: Arc<dyn WeatherPort>,
    notifier: Arc<dyn NotifierPort>,
    config: LookupConfig,
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LookupService {
    /// Create a new lookup service
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        notifier: Arc<dyn NotifierPort>,
        config: LookupConfig,
    ) -> Self {
        Self {
            weather,
            notifier,
            config,
        }
    }

    /// Get the service configuration
    #[must_use]
    pub const fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Look up weather for `city` and update `view`
    ///
    /// Both requests are issued concurrently. A failed request leaves the
    /// corresponding part of `view` as it was and produces an error
    /// notification; the aggregation is only run on a successful forecast.
    #[instrument(skip_all, fields(city = %city))]
    pub async fn submit(&self, city: &CityName, view: &mut WeatherView) -> LookupOutcome {
        let (current, forecast) = tokio::join!(
            self.weather.current_conditions(city),
            self.weather.forecast_samples(city)
        );

        view.city = Some(city.clone());
        let mut outcome = LookupOutcome::default();

        match current {
            Ok(conditions) => {
                info!(observed_at = conditions.observed_at, "Current conditions loaded");
                view.current = Some(conditions);
                self.notifier
                    .notify(&Notification::success(CURRENT_SUCCESS_MESSAGE));
            },
            Err(e) => {
                error!(error = %e, "Error fetching weather data");
                self.notifier
                    .notify(&Notification::error(CURRENT_FAILURE_MESSAGE));
                outcome.current_error = Some(e);
            },
        }

        let summarised = forecast.and_then(|samples| {
            let daily = aggregate_daily(&samples, self.config.zone)?;
            Ok((samples, daily))
        });

        match summarised {
            Ok((mut samples, daily)) => {
                debug!(
                    samples = samples.len(),
                    days = daily.len(),
                    "Forecast summarised"
                );
                samples.truncate(self.config.hourly_samples);
                view.hourly = samples;
                view.daily = daily;
            },
            Err(e) => {
                error!(error = %e, "Error fetching forecast data");
                self.notifier
                    .notify(&Notification::error(FORECAST_FAILURE_MESSAGE));
                outcome.forecast_error = Some(e);
            },
        }

        outcome
    }
}
