// ABOUTME: Pure mapping from workout records to distance and points gauges
// ABOUTME: Coerces upstream numeric fields and tags each observation with the person's name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::metrics::{NAME_TAG_PREFIX, WORKOUT_DISTANCE, WORKOUT_POINTS};
use crate::errors::{AppError, AppResult};
use crate::models::{MetricObservation, NumericValue, WorkoutRecord};

/// Map every record to its two gauges, in record order, distance first
///
/// The batch is all-or-nothing: one non-numeric field fails the whole call so
/// that no person is reported with only one of their two metrics.
///
/// # Errors
/// Returns `InvalidFormat` naming the record and field that failed coercion
pub fn map_records(records: &[WorkoutRecord], host: &str) -> AppResult<Vec<MetricObservation>> {
    let mut observations = Vec::with_capacity(records.len() * 2);
    for record in records {
        let [distance, points] = map_record(record, host)?;
        observations.push(distance);
        observations.push(points);
    }
    Ok(observations)
}

/// Map one record to its distance and points gauges
///
/// # Errors
/// Returns `InvalidFormat` if either field is not numeric
pub fn map_record(record: &WorkoutRecord, host: &str) -> AppResult<[MetricObservation; 2]> {
    let tags = vec![name_tag(&record.name)];

    let distance = coerce(record, "distance", &record.distance)?;
    let points = coerce(record, "points", &record.points)?;

    Ok([
        MetricObservation::gauge(WORKOUT_DISTANCE, distance, tags.clone(), host),
        MetricObservation::gauge(WORKOUT_POINTS, points, tags, host),
    ])
}

/// Tag identifying the person an observation belongs to
#[must_use]
pub fn name_tag(name: &str) -> String {
    format!("{NAME_TAG_PREFIX}{name}")
}

fn coerce(record: &WorkoutRecord, field: &str, value: &NumericValue) -> AppResult<f64> {
    value.as_f64().ok_or_else(|| {
        AppError::invalid_format(format!(
            "{field} for '{}' is not numeric: {value}",
            record.name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn record(name: &str, distance: NumericValue, points: NumericValue) -> WorkoutRecord {
        WorkoutRecord {
            name: name.to_owned(),
            distance,
            points,
        }
    }

    #[test]
    fn test_single_record_produces_distance_then_points() {
        let records = vec![record(
            "alice",
            NumericValue::Number(5.0),
            NumericValue::Number(12.0),
        )];
        let observations = map_records(&records, "").unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].metric_name, "sportid.workout.distance");
        assert!((observations[0].value - 5.0).abs() < f64::EPSILON);
        assert_eq!(observations[1].metric_name, "sportid.workout.points");
        assert!((observations[1].value - 12.0).abs() < f64::EPSILON);
        for observation in &observations {
            assert_eq!(observation.tags, vec!["name:alice".to_owned()]);
            assert_eq!(observation.host, "");
        }
    }

    #[test]
    fn test_string_values_are_coerced() {
        let records = vec![record("bob", "5.2".into(), "7".into())];
        let observations = map_records(&records, "runner-box").unwrap();

        assert!((observations[0].value - 5.2).abs() < f64::EPSILON);
        assert!((observations[1].value - 7.0).abs() < f64::EPSILON);
        assert!(observations.iter().all(|o| o.host == "runner-box"));
    }

    #[test]
    fn test_non_numeric_value_fails_whole_batch() {
        let records = vec![
            record("alice", NumericValue::Number(1.0), NumericValue::Number(2.0)),
            record("mallory", "lots".into(), NumericValue::Number(3.0)),
        ];
        let err = map_records(&records, "").unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("mallory"));
        assert!(err.message.contains("distance"));
    }

    #[test]
    fn test_empty_input_maps_to_empty_output() {
        assert!(map_records(&[], "").unwrap().is_empty());
    }
}
