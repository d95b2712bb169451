// ABOUTME: One-second tick loop that runs a refresh cycle every configured interval
// ABOUTME: Logs cycle failures and keeps going; stops cleanly on the shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

use crate::constants::schedule::TICK_SECS;
use crate::pipeline::RefreshCycle;

/// Counters reported when the loop stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerSummary {
    /// Cycles started
    pub cycles_run: u64,
    /// Cycles that completed without error
    pub cycles_succeeded: u64,
    /// Cycles that ended with an error
    pub cycles_failed: u64,
}

/// Cooperative single-threaded refresh scheduler
///
/// Each tick checks the elapsed-seconds counter, runs a cycle when it has
/// reached the interval, then sleeps one second. Sleep jitter accumulates; the
/// period is not drift-corrected.
pub struct Scheduler {
    interval_secs: u64,
    elapsed_secs: u64,
    summary: SchedulerSummary,
}

impl Scheduler {
    /// Create a scheduler
    ///
    /// With `run_on_start` the counter starts full so the first cycle runs on
    /// the first tick; otherwise the first cycle waits one whole interval.
    #[must_use]
    pub const fn new(interval_secs: u64, run_on_start: bool) -> Self {
        Self {
            interval_secs,
            elapsed_secs: if run_on_start { interval_secs } else { 0 },
            summary: SchedulerSummary {
                cycles_run: 0,
                cycles_succeeded: 0,
                cycles_failed: 0,
            },
        }
    }

    /// Counters so far
    #[must_use]
    pub const fn summary(&self) -> SchedulerSummary {
        self.summary
    }

    /// Run until `shutdown` resolves
    ///
    /// The shutdown future is only observed between ticks, so a cycle that has
    /// started always runs to completion.
    pub async fn run<C, F>(&mut self, cycle: &C, shutdown: F) -> SchedulerSummary
    where
        C: RefreshCycle + ?Sized,
        F: Future<Output = ()>,
    {
        info!(
            "Scheduler started: refreshing every {}s",
            self.interval_secs
        );
        tokio::pin!(shutdown);

        loop {
            if self.elapsed_secs >= self.interval_secs {
                self.elapsed_secs = 0;
                info!("Time to refresh stats...");
                self.run_once(cycle).await;
            }
            self.elapsed_secs += 1;

            tokio::select! {
                () = &mut shutdown => {
                    warn!("User interrupt, exiting.");
                    return self.summary;
                }
                () = sleep(Duration::from_secs(TICK_SECS)) => {}
            }
        }
    }

    /// Run a single cycle and record its outcome
    pub async fn run_once<C>(&mut self, cycle: &C) -> bool
    where
        C: RefreshCycle + ?Sized,
    {
        self.summary.cycles_run += 1;
        match cycle.run_cycle().await {
            Ok(report) => {
                self.summary.cycles_succeeded += 1;
                info!(
                    records = report.records,
                    observations = report.observations,
                    status = report.status.as_deref().unwrap_or("skipped"),
                    "Refresh cycle {} completed",
                    self.summary.cycles_run
                );
                true
            }
            Err(e) => {
                self.summary.cycles_failed += 1;
                error!(
                    code = ?e.code,
                    external = e.code.is_external(),
                    "Refresh cycle {} failed: {}",
                    self.summary.cycles_run,
                    e
                );
                false
            }
        }
    }
}
