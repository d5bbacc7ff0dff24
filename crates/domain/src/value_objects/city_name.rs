//! City name value object with validation
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let city = CityName::new("  Lisbon ").unwrap();
//! assert_eq!(city.as_str(), "Lisbon");
//!
//! assert!(CityName::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A city name as typed by the user, trimmed and length-checked
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct CityName {
    #[validate(length(min = 1, max = 100))]
    value: String,
}

impl CityName {
    /// Maximum accepted length in characters
    pub const MAX_LEN: usize = 100;

    /// Create a city name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` if the trimmed name is empty
    /// or longer than [`CityName::MAX_LEN`] characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into().trim().to_string();

        let candidate = Self { value };
        candidate.validate().map_err(|_| {
            DomainError::InvalidCityName(format!(
                "must be between 1 and {} characters",
                Self::MAX_LEN
            ))
        })?;

        Ok(candidate)
    }

    /// Get the city name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::str::FromStr for CityName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(city: CityName) -> Self {
        city.value
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
