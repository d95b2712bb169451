// ABOUTME: Main library entry point for the SportID to Datadog monitor
// ABOUTME: Wires configuration, the SportID fetcher, metric mapping, Datadog sender, and scheduler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `SportID` Monitor
//!
//! Polls the `SportID` workout stats overview on a fixed interval and forwards
//! each person's distance and points to Datadog as gauges.
//!
//! ## Architecture
//!
//! A single linear pipeline, run by a one-second tick scheduler:
//! - **sportid**: fetches the 7-day overview with a session cookie
//! - **metrics**: maps each record to two gauge observations
//! - **datadog**: submits the batch to the series API
//! - **pipeline**: composes the three stages for one cycle
//! - **scheduler**: runs a cycle every interval until interrupted
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sportid_monitor::config::MonitorConfig;
//! use sportid_monitor::datadog::DatadogClient;
//! use sportid_monitor::pipeline::Pipeline;
//! use sportid_monitor::scheduler::Scheduler;
//! use sportid_monitor::shutdown::ShutdownSignal;
//! use sportid_monitor::sportid::SportIdClient;
//! use sportid_monitor::utils::http_client::create_client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MonitorConfig::from_env()?;
//! let http = create_client()?;
//! let pipeline = Pipeline::new(
//!     SportIdClient::new((&config).into(), http.clone()),
//!     DatadogClient::new((&config).into(), http),
//!     config.host.clone(),
//! );
//!
//! let shutdown = ShutdownSignal::install()?;
//! let mut scheduler = Scheduler::new(config.interval_secs, config.run_on_start);
//! let summary = scheduler.run(&pipeline, shutdown.wait()).await;
//! println!("{} cycles", summary.cycles_run);
//! # Ok(())
//! # }
//! ```

// Re-export sportid-core modules so the crate reads as one namespace
pub use sportid_core::constants;
pub use sportid_core::errors;
pub use sportid_core::models;

/// Environment-driven configuration
pub mod config;

/// Datadog series submission
pub mod datadog;

/// Logging configuration and subscriber setup
pub mod logging;

/// Workout record to gauge mapping
pub mod metrics;

/// Fetch → map → send refresh cycle
pub mod pipeline;

/// Tick loop running refresh cycles
pub mod scheduler;

/// Interrupt handling for the refresh loop
pub mod shutdown;

/// `SportID` workout stats client
pub mod sportid;

/// Shared HTTP helpers
pub mod utils;
