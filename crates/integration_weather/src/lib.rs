//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap 2.5 API (<https://openweathermap.org/api>).
//! Provides current weather and the 5-day / 3-hour forecast by city name.
//! Temperatures are returned in Kelvin, the API's default unit.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    Condition, CurrentWeather, Forecast, ForecastCity, ForecastEntry, MainReadings, Wind,
};
