//! Forecast presentation settings.

use application::services::{DEFAULT_HOURLY_SAMPLES, LookupConfig};
use domain::{BucketingZone, DomainError};
use serde::{Deserialize, Serialize};

/// Forecast configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastAppConfig {
    /// Number of raw forecast samples in the hourly strip
    #[serde(default = "default_hourly_samples")]
    pub hourly_samples: usize,

    /// Zone for grouping samples into days: `local`, `utc`, `+05:30` or an IANA name
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

const fn default_hourly_samples() -> usize {
    DEFAULT_HOURLY_SAMPLES
}

fn default_timezone() -> String {
    "local".to_string()
}

impl Default for ForecastAppConfig {
    fn default() -> Self {
        Self {
            hourly_samples: default_hourly_samples(),
            timezone: default_timezone(),
        }
    }
}

impl ForecastAppConfig {
    /// Parse the configured bucketing zone
    pub fn zone(&self) -> Result<BucketingZone, DomainError> {
        self.timezone.parse()
    }

    /// Build the lookup service configuration
    pub fn to_lookup_config(&self) -> Result<LookupConfig, DomainError> {
        Ok(LookupConfig {
            hourly_samples: self.hourly_samples,
            zone: self.zone()?,
        })
    }
}
