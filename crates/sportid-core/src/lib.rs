// ABOUTME: Core types and constants for the SportID to Datadog monitor
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `SportID` Core
//!
//! Foundation crate providing shared types for the monitor. It holds no I/O so
//! the models and error codes can be exercised without a runtime.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Upstream/backend endpoints, metric names, environment keys
//! - **models**: `WorkoutRecord`, `NumericValue`, `MetricObservation`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Workout and metric data models
pub mod models;
