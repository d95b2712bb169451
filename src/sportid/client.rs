// ABOUTME: SportID API client fetching the 7-day workout overview with a session cookie
// ABOUTME: Implements StatsSource for the refresh pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SportID` workout stats client
//!
//! `SportID` has no public API credentials; the client replays a browser
//! session by sending the `sportid_session` cookie. Obtaining and refreshing
//! that cookie is left to the operator.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::Client;
use tracing::{info, instrument};

use crate::config::MonitorConfig;
use crate::constants::sportid::{
    workout_stats_path, SERVICE_NAME, SESSION_COOKIE_NAME, STATS_TIME_INTERVAL_DAYS,
};
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutRecord;
use crate::pipeline::StatsSource;
use crate::utils::http_client::{ensure_success, transport_error};

/// `SportID` client configuration
#[derive(Clone)]
pub struct SportIdClientConfig {
    /// API base URL, e.g. `https://api.sportid.ee`
    pub base_url: String,
    /// Account whose overview is requested
    pub user_id: u64,
    /// Raw `sportid_session` cookie value
    pub session_cookie: String,
}

impl From<&MonitorConfig> for SportIdClientConfig {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            base_url: config.sportid_api_base.clone(),
            user_id: config.sportid_user_id,
            session_cookie: config.session_cookie.clone(),
        }
    }
}

/// Client for the `SportID` workout stats endpoint
pub struct SportIdClient {
    config: SportIdClientConfig,
    http_client: Client,
}

impl SportIdClient {
    /// Create a client using the given HTTP client
    #[must_use]
    pub fn new(config: SportIdClientConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Full URL of the workout stats endpoint
    #[must_use]
    pub fn stats_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            workout_stats_path(self.config.user_id)
        )
    }

    /// Fetch the aggregated workout overview for the last seven days
    ///
    /// # Errors
    /// Returns an error on transport failure, any non-2xx status, or a body
    /// that is not an array of `{name, distance, points}` objects
    #[instrument(skip(self), fields(user_id = self.config.user_id))]
    pub async fn get_workout_stats(&self) -> AppResult<Vec<WorkoutRecord>> {
        info!("Loading stats from SportID");

        let time_interval = STATS_TIME_INTERVAL_DAYS.to_string();
        let response = self
            .http_client
            .get(self.stats_url())
            .query(&[("overview", "true"), ("time_interval", time_interval.as_str())])
            .header(ACCEPT, "application/json")
            .header(
                COOKIE,
                format!("{SESSION_COOKIE_NAME}={}", self.config.session_cookie),
            )
            .send()
            .await
            .map_err(|e| transport_error(SERVICE_NAME, e))?;

        let response = ensure_success(SERVICE_NAME, response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(SERVICE_NAME, e))?;

        let records: Vec<WorkoutRecord> = serde_json::from_str(&body).map_err(|e| {
            AppError::invalid_format(format!("{SERVICE_NAME}: unexpected stats payload: {e}"))
                .with_source(e)
        })?;

        info!("Received workout stats for {} people", records.len());
        Ok(records)
    }
}

#[async_trait]
impl StatsSource for SportIdClient {
    async fn fetch_workout_stats(&self) -> AppResult<Vec<WorkoutRecord>> {
        self.get_workout_stats().await
    }
}
