// ABOUTME: Metric mapping module turning workout records into gauge observations
// ABOUTME: No I/O; consumed by the refresh pipeline between fetch and submit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Record to observation mapping
pub mod mapper;

pub use mapper::{map_record, map_records, name_tag};
