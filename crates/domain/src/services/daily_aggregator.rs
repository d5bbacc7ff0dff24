//! Daily forecast aggregation
//!
//! Buckets timestamped forecast samples by calendar date and folds each
//! bucket into a [`DailySummary`]. Output order is the order in which each
//! date first appears in the input, not sorted order.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::entities::{DailySummary, WeatherSample};
use crate::errors::DomainError;
use crate::value_objects::BucketingZone;

/// Summarise forecast samples into one record per calendar date
///
/// Dates are derived from each sample's timestamp in `zone`. The first sample
/// of a date becomes its representative; later samples only widen the
/// temperature range and raise the precipitation probability.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if any sample has a non-finite
/// temperature, a precipitation probability outside `[0, 1]`, or a timestamp
/// that cannot be converted to a date. Nothing is returned for the valid
/// samples in that case.
///
/// # Examples
///
/// ```
/// use domain::{aggregate_daily, BucketingZone};
///
/// let summaries = aggregate_daily(&[], BucketingZone::Utc).unwrap();
/// assert!(summaries.is_empty());
/// ```
pub fn aggregate_daily(
    samples: &[WeatherSample],
    zone: BucketingZone,
) -> Result<Vec<DailySummary>, DomainError> {
    let mut days: IndexMap<NaiveDate, DailySummary> = IndexMap::new();

    for sample in samples {
        sample.validate()?;

        let date = zone.date_of(sample.timestamp).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "timestamp {} is out of range",
                sample.timestamp
            ))
        })?;

        match days.get_mut(&date) {
            Some(summary) => summary.absorb(sample),
            None => {
                days.insert(date, DailySummary::start(date, sample));
            },
        }
    }

    Ok(days.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Kelvin;

    const HOUR: i64 = 3600;
    // 2024-06-01T00:00:00Z
    const DAY_D: i64 = 1_717_200_000;

    fn sample(timestamp: i64, min: f64, max: f64, pop: f64) -> WeatherSample {
        WeatherSample {
            timestamp,
            temperature: Kelvin::new(f64::midpoint(min, max)),
            temperature_min: Kelvin::new(min),
            temperature_max: Kelvin::new(max),
            precipitation_probability: pop,
            icon_code: format!("icon-{timestamp}"),
            description: format!("desc-{timestamp}"),
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let out = aggregate_daily(&[], BucketingZone::Utc).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn three_samples_one_day() {
        let input = vec![
            sample(DAY_D, 10.0, 15.0, 0.1),
            sample(DAY_D + 3 * HOUR, 8.0, 17.0, 0.4),
            sample(DAY_D + 6 * HOUR, 12.0, 14.0, 0.2),
        ];

        let out = aggregate_daily(&input, BucketingZone::Utc).unwrap();

        assert_eq!(out.len(), 1);
        let day = &out[0];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(day.temperature_min, Kelvin::new(8.0));
        assert_eq!(day.temperature_max, Kelvin::new(17.0));
        assert!((day.precipitation_probability - 0.4).abs() < f64::EPSILON);
        assert_eq!(day.representative, input[0]);
    }

    #[test]
    fn two_days_in_first_seen_order() {
        let input = vec![
            sample(DAY_D + 12 * HOUR, 1.0, 2.0, 0.0),
            sample(DAY_D + 15 * HOUR, 1.0, 2.0, 0.0),
            sample(DAY_D + 18 * HOUR, 1.0, 2.0, 0.0),
            sample(DAY_D + 24 * HOUR, 50.0, 60.0, 0.9),
            sample(DAY_D + 27 * HOUR, 50.0, 60.0, 0.9),
        ];

        let out = aggregate_daily(&input, BucketingZone::Utc).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(out[1].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn order_follows_first_occurrence_not_date() {
        let input = vec![
            sample(DAY_D + 48 * HOUR, 1.0, 2.0, 0.0),
            sample(DAY_D, 1.0, 2.0, 0.0),
            sample(DAY_D + 50 * HOUR, 1.0, 2.0, 0.0),
        ];

        let out = aggregate_daily(&input, BucketingZone::Utc).unwrap();

        let dates: Vec<_> = out.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn singleton_day_keeps_sample_values() {
        let only = sample(DAY_D + 21 * HOUR, 283.5, 289.25, 0.67);
        let out = aggregate_daily(std::slice::from_ref(&only), BucketingZone::Utc).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].temperature_min, only.temperature_min);
        assert_eq!(out[0].temperature_max, only.temperature_max);
        assert!((out[0].precipitation_probability - 0.67).abs() < f64::EPSILON);
    }

    #[test]
    fn zone_shifts_midnight_boundary() {
        let input = vec![
            sample(DAY_D - HOUR, 1.0, 2.0, 0.0),
            sample(DAY_D, 1.0, 2.0, 0.0),
        ];

        let utc = aggregate_daily(&input, BucketingZone::Utc).unwrap();
        assert_eq!(utc.len(), 2);

        let plus_five: BucketingZone = "+05:00".parse().unwrap();
        let shifted = aggregate_daily(&input, plus_five).unwrap();
        assert_eq!(shifted.len(), 1);
        assert_eq!(shifted[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn invalid_sample_fails_whole_call() {
        let input = vec![
            sample(DAY_D, 1.0, 2.0, 0.0),
            sample(DAY_D + 3 * HOUR, f64::NAN, 2.0, 0.0),
        ];
        let err = aggregate_daily(&input, BucketingZone::Utc).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn probability_above_one_rejected() {
        let input = vec![sample(DAY_D, 1.0, 2.0, 1.5)];
        assert!(aggregate_daily(&input, BucketingZone::Utc).is_err());
    }

    #[test]
    fn unrepresentable_timestamp_rejected() {
        let input = vec![sample(i64::MAX, 1.0, 2.0, 0.0)];
        let err = aggregate_daily(&input, BucketingZone::Utc).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
