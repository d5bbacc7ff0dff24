//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input violated a precondition (missing or non-finite values, out-of-range fields)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// City name was empty or too long
    #[error("Invalid city name: {0}")]
    InvalidCityName(String),

    /// Time zone specification could not be parsed
    #[error("Invalid time zone: {0}")]
    InvalidTimezone(String),
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_error_message() {
        let err = DomainError::invalid_input("temperature_min is NaN");
        assert_eq!(err.to_string(), "Invalid input: temperature_min is NaN");
    }

    #[test]
    fn invalid_city_name_error_message() {
        let err = DomainError::InvalidCityName("must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid city name: must not be empty");
    }

    #[test]
    fn invalid_timezone_error_message() {
        let err = DomainError::InvalidTimezone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Invalid time zone: Mars/Olympus");
    }
}
