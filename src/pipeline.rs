// ABOUTME: One refresh cycle: fetch workout stats, map them to gauges, submit the batch
// ABOUTME: Defines the StatsSource and MetricSink seams the cycle is built from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Refresh pipeline
//!
//! Data flows strictly source → mapper → sink. Any stage failure ends the
//! cycle with an [`AppError`]; nothing is sent after a failed fetch or a
//! failed mapping.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::errors::AppResult;
use crate::metrics::map_records;
use crate::models::{MetricObservation, WorkoutRecord};

/// Upstream that yields the current workout overview
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch one overview of per-person workout totals
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    async fn fetch_workout_stats(&self) -> AppResult<Vec<WorkoutRecord>>;
}

/// Backend that accepts metric observations
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Submit a batch in a single call, returning the backend's status string
    ///
    /// # Errors
    /// Returns an error if the backend rejects or cannot receive the batch
    async fn submit(&self, observations: &[MetricObservation]) -> AppResult<String>;
}

/// Something the scheduler can run once per interval
#[async_trait]
pub trait RefreshCycle: Send + Sync {
    /// Run one full cycle to completion
    ///
    /// # Errors
    /// Returns the first stage failure of the cycle
    async fn run_cycle(&self) -> AppResult<CycleReport>;
}

/// Outcome of a successful cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Records returned by the upstream
    pub records: usize,
    /// Observations submitted
    pub observations: usize,
    /// Backend status, `None` when there was nothing to submit
    pub status: Option<String>,
}

/// Fetch → map → send pipeline
pub struct Pipeline<S, K> {
    source: S,
    sink: K,
    host: String,
}

impl<S, K> Pipeline<S, K>
where
    S: StatsSource,
    K: MetricSink,
{
    /// Create a pipeline tagging observations with `host`
    pub fn new(source: S, sink: K, host: impl Into<String>) -> Self {
        Self {
            source,
            sink,
            host: host.into(),
        }
    }

    /// Borrow the sink (used by tests to inspect recorded batches)
    pub const fn sink(&self) -> &K {
        &self.sink
    }
}

#[async_trait]
impl<S, K> RefreshCycle for Pipeline<S, K>
where
    S: StatsSource,
    K: MetricSink,
{
    #[instrument(skip(self), fields(host = %self.host))]
    async fn run_cycle(&self) -> AppResult<CycleReport> {
        let records = self.source.fetch_workout_stats().await?;
        let observations = map_records(&records, &self.host)?;

        if observations.is_empty() {
            info!("No workout records returned, nothing to send");
            return Ok(CycleReport {
                records: 0,
                observations: 0,
                status: None,
            });
        }

        let status = self.sink.submit(&observations).await?;

        Ok(CycleReport {
            records: records.len(),
            observations: observations.len(),
            status: Some(status),
        })
    }
}
