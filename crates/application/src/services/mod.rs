//! Application services - use case implementations

mod lookup_service;
mod weather_view;

pub use lookup_service::{
    CURRENT_FAILURE_MESSAGE, CURRENT_SUCCESS_MESSAGE, DEFAULT_HOURLY_SAMPLES,
    FORECAST_FAILURE_MESSAGE, LookupConfig, LookupOutcome, LookupService,
};
pub use weather_view::WeatherView;
