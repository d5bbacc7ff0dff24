//! Absolute temperature value object
//!
//! The forecast feed reports temperatures in Kelvin. Conversions to Celsius
//! live here so every view applies the same rounding rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset between Kelvin and Celsius
const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// A temperature in Kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(f64);

impl Kelvin {
    /// Wrap a raw Kelvin value
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Build from a Celsius value
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Self(celsius + ZERO_CELSIUS_IN_KELVIN)
    }

    /// Raw Kelvin value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the value is a finite number
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Temperature in Celsius
    #[must_use]
    pub fn celsius(self) -> f64 {
        self.0 - ZERO_CELSIUS_IN_KELVIN
    }

    /// Celsius rounded to the nearest degree (current temperature display)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn celsius_rounded(self) -> i32 {
        self.celsius().round() as i32
    }

    /// Celsius rounded down (feels-like, hourly and daily display)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn celsius_floor(self) -> i32 {
        self.celsius().floor() as i32
    }

    /// The lower of two temperatures
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The higher of two temperatures
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}K", self.0)
    }
}

impl From<f64> for Kelvin {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
