// ABOUTME: Configuration management module for the monitor's runtime settings
// ABOUTME: Re-exports the environment-driven MonitorConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: credentials, host label, interval, and endpoint overrides

/// Environment-driven monitor configuration
pub mod environment;

pub use environment::{load_dotenv, MonitorConfig};
