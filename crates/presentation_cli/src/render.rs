//! Text and JSON rendering of a weather view
//!
//! Temperatures are shown in whole degrees Celsius: the current temperature
//! is rounded, every other temperature is floored.

use application::WeatherView;
use domain::{BucketingZone, CurrentConditions, DailySummary, WeatherSample};
use serde_json::Value;

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Provider image for an icon code, `None` for an unknown icon
fn icon_url(code: &str) -> Option<String> {
    (!code.is_empty()).then(|| format!("{ICON_BASE_URL}/{code}@2x.png"))
}

/// Wall-clock time of a timestamp in `zone`, falling back to the raw value
fn format_timestamp(timestamp: i64, zone: &BucketingZone) -> String {
    zone.local_datetime(timestamp).map_or_else(
        || timestamp.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Append ` (icon)` to a description when an icon is known
fn condition(description: &str, icon: &str) -> String {
    match (description.is_empty(), icon.is_empty()) {
        (_, true) => description.to_string(),
        (true, false) => format!("({icon})"),
        (false, false) => format!("{description} ({icon})"),
    }
}

fn render_current(current: &CurrentConditions, zone: &BucketingZone) -> String {
    let mut out = String::new();
    out.push_str(&format!("Current weather in {}\n", current.city));
    out.push_str(&format!(
        "  Temperature:   {}°C  {}\n",
        current.temperature.celsius_rounded(),
        condition(&current.description, &current.icon_code)
    ));
    out.push_str(&format!(
        "  Feels Like:    {}°C\n",
        current.feels_like.celsius_floor()
    ));
    if let Some(url) = icon_url(&current.icon_code) {
        out.push_str(&format!("  Icon:          {url}\n"));
    }
    out.push_str(&format!("  Wind Speed:    {} m/s\n", current.wind_speed_mps));
    out.push_str(&format!("  Humidity:      {}\n", current.humidity));
    out.push_str(&format!("  Pressure:      {} hPa\n", current.pressure_hpa));
    out.push_str(&format!(
        "  Date and Time: {}\n",
        format_timestamp(current.observed_at, zone)
    ));
    out
}

fn render_hourly(samples: &[WeatherSample], zone: &BucketingZone) -> String {
    let mut out = String::from("Hourly Forecast\n");
    for sample in samples {
        out.push_str(&format!(
            "  {}  {:>4}°C  {}\n",
            format_timestamp(sample.timestamp, zone),
            sample.temperature.celsius_floor(),
            condition(&sample.description, &sample.icon_code)
        ));
    }
    out
}

fn render_daily(days: &[DailySummary]) -> String {
    let mut out = format!("{}-Day Forecast\n", days.len());
    for day in days {
        out.push_str(&format!(
            "  {}  {:>4}°C / {:>4}°C  {}  Chance of Rain: {}%\n",
            day.date.format("%Y-%m-%d"),
            day.temperature_min.celsius_floor(),
            day.temperature_max.celsius_floor(),
            condition(day.description(), day.icon_code()),
            day.precipitation_percent()
        ));
    }
    out
}

/// Render a view as human-readable text
///
/// Sections without data are omitted; an empty view renders as an empty string.
#[must_use]
pub fn render_text(view: &WeatherView, zone: &BucketingZone) -> String {
    let mut sections = Vec::new();
    if let Some(current) = &view.current {
        sections.push(render_current(current, zone));
    }
    if !view.hourly.is_empty() {
        sections.push(render_hourly(&view.hourly, zone));
    }
    if !view.daily.is_empty() {
        sections.push(render_daily(&view.daily));
    }
    sections.join("\n")
}

/// Add an `icon_url` field next to an object's `icon_code`
fn attach_icon_url(entry: &mut Value) {
    let url = entry
        .get("icon_code")
        .and_then(Value::as_str)
        .and_then(icon_url);
    if let (Some(url), Some(object)) = (url, entry.as_object_mut()) {
        object.insert("icon_url".to_string(), Value::String(url));
    }
}

/// Render a view as pretty-printed JSON
///
/// Every entry carrying an icon code also gets the matching `icon_url`.
pub fn render_json(view: &WeatherView) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(view)?;
    if let Some(current) = value.get_mut("current") {
        attach_icon_url(current);
    }
    if let Some(Value::Array(hourly)) = value.get_mut("hourly") {
        hourly.iter_mut().for_each(attach_icon_url);
    }
    if let Some(Value::Array(daily)) = value.get_mut("daily") {
        for day in daily {
            if let Some(representative) = day.get_mut("representative") {
                attach_icon_url(representative);
            }
        }
    }
    serde_json::to_string_pretty(&value)
}
