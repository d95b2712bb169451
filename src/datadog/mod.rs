// ABOUTME: Datadog monitoring backend integration
// ABOUTME: Exposes the series submission client used as the pipeline's MetricSink
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Series submission HTTP client
pub mod client;

pub use client::{DatadogClient, DatadogClientConfig, SeriesEntry, SeriesPayload};
