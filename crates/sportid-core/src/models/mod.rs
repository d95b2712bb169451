// ABOUTME: Data models for upstream workout rows and outbound metric observations
// ABOUTME: Both are transient and live for a single refresh cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric field as delivered by the upstream API
///
/// `SportID` is not consistent about JSON types: the same field may come back
/// as `5.2` or `"5.2"`. The raw value is kept until the mapper coerces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    /// JSON number
    Number(f64),
    /// JSON string expected to hold a number
    Text(String),
}

impl NumericValue {
    /// Coerce to a finite `f64`, or `None` if the value is not numeric
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One tracked person's totals over the stats window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Display name of the person
    pub name: String,
    /// Distance covered
    pub distance: NumericValue,
    /// Points earned
    pub points: NumericValue,
}

/// Kind of metric submitted to the backend
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Point-in-time value
    #[default]
    Gauge,
}

impl MetricKind {
    /// Wire name of the kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gauge => "gauge",
        }
    }
}

/// A single numeric observation ready for submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricObservation {
    /// Metric name, e.g. `sportid.workout.distance`
    pub metric_name: String,
    /// Observed value
    pub value: f64,
    /// Tags in `key:value` form
    pub tags: Vec<String>,
    /// Host label, empty when unset
    pub host: String,
    /// Metric kind
    pub kind: MetricKind,
}

impl MetricObservation {
    /// Create a gauge observation
    pub fn gauge(
        metric_name: impl Into<String>,
        value: f64,
        tags: Vec<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            metric_name: metric_name.into(),
            value,
            tags,
            host: host.into(),
            kind: MetricKind::Gauge,
        }
    }
}

impl fmt::Display for MetricObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} [{}]", self.metric_name, self.value, self.tags.join(","))
    }
}
