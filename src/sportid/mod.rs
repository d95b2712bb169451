// ABOUTME: SportID upstream integration
// ABOUTME: Exposes the workout stats client used as the pipeline's StatsSource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Workout stats HTTP client
pub mod client;

pub use client::{SportIdClient, SportIdClientConfig};
