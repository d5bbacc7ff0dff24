//! Domain entities - forecast samples, daily summaries and current conditions

mod current_conditions;
mod daily_summary;
mod weather_sample;

pub use current_conditions::CurrentConditions;
pub use daily_summary::DailySummary;
pub use weather_sample::WeatherSample;
