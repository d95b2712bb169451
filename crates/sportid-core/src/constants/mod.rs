// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoints, metric names, environment keys, and scheduling defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by the external system or concern they belong to.

/// `SportID` upstream API
pub mod sportid {
    /// Production API base URL
    pub const API_BASE: &str = "https://api.sportid.ee";
    /// Account whose followed-people overview is polled
    pub const DEFAULT_USER_ID: u64 = 9121;
    /// Rolling window of the stats overview, in days
    pub const STATS_TIME_INTERVAL_DAYS: u32 = 7;
    /// Name of the session cookie carrying the login
    pub const SESSION_COOKIE_NAME: &str = "sportid_session";
    /// Service name used in logs and errors
    pub const SERVICE_NAME: &str = "SportID";

    /// Path of the workout stats endpoint for a user
    #[must_use]
    pub fn workout_stats_path(user_id: u64) -> String {
        format!("/user/{user_id}/workout/stats")
    }
}

/// Datadog metrics backend
pub mod datadog {
    /// Production API base URL
    pub const API_BASE: &str = "https://api.datadoghq.com";
    /// Metric series submission endpoint
    pub const SERIES_PATH: &str = "/api/v1/series";
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "DD-API-KEY";
    /// Header carrying the application key
    pub const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";
    /// Service name used in logs and errors
    pub const SERVICE_NAME: &str = "Datadog";
}

/// Metric names and tag formats
pub mod metrics {
    /// Distance covered over the stats window
    pub const WORKOUT_DISTANCE: &str = "sportid.workout.distance";
    /// Points earned over the stats window
    pub const WORKOUT_POINTS: &str = "sportid.workout.points";
    /// Prefix of the per-person tag
    pub const NAME_TAG_PREFIX: &str = "name:";
}

/// HTTP client identity
pub mod http {
    /// User agent sent to both external services
    pub const USER_AGENT: &str = "dd-stats-monitor 0.1";
}

/// Environment variable names
pub mod env_keys {
    /// Upstream session credential
    pub const COOKIE: &str = "COOKIE";
    /// Datadog API key
    pub const API_KEY: &str = "API_KEY";
    /// Datadog application key
    pub const APP_KEY: &str = "APP_KEY";
    /// Host label attached to every observation
    pub const HOST: &str = "HOST";
    /// Poll period in seconds
    pub const INTERVAL: &str = "INTERVAL";
    /// Whether the first cycle runs immediately
    pub const RUN_ON_START: &str = "RUN_ON_START";
    /// Override for the `SportID` base URL
    pub const SPORTID_API_BASE: &str = "SPORTID_API_BASE";
    /// Override for the polled `SportID` user
    pub const SPORTID_USER_ID: &str = "SPORTID_USER_ID";
    /// Override for the Datadog base URL
    pub const DATADOG_API_BASE: &str = "DATADOG_API_BASE";
}

/// Scheduling defaults
pub mod schedule {
    /// Default poll period in seconds
    pub const DEFAULT_INTERVAL_SECS: u64 = 20;
    /// Scheduler tick length in seconds
    pub const TICK_SECS: u64 = 1;
}

/// Service identity used by structured logging
pub mod service_names {
    /// Binary / service name
    pub const SPORTID_MONITOR: &str = "sportid-monitor";
}
