// ABOUTME: Datadog metrics API client submitting gauge series in one call per cycle
// ABOUTME: Implements MetricSink for the refresh pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Datadog series submission
//!
//! Observations carry a single value; on the wire each becomes a one-point
//! series stamped with the submission time, which is how Datadog's own client
//! libraries expand bare values.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::MonitorConfig;
use crate::constants::datadog::{API_KEY_HEADER, APP_KEY_HEADER, SERIES_PATH, SERVICE_NAME};
use crate::errors::{AppError, AppResult};
use crate::models::{MetricKind, MetricObservation};
use crate::pipeline::MetricSink;
use crate::utils::http_client::{ensure_success, transport_error};

/// Datadog client configuration
#[derive(Clone)]
pub struct DatadogClientConfig {
    /// API base URL, e.g. `https://api.datadoghq.com`
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// Application key
    pub app_key: String,
}

impl From<&MonitorConfig> for DatadogClientConfig {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            base_url: config.datadog_api_base.clone(),
            api_key: config.api_key.clone(),
            app_key: config.app_key.clone(),
        }
    }
}

/// Request body of `POST /api/v1/series`
#[derive(Debug, Serialize)]
pub struct SeriesPayload<'a> {
    /// One entry per observation
    pub series: Vec<SeriesEntry<'a>>,
}

/// A single series in the submission body
#[derive(Debug, Serialize)]
pub struct SeriesEntry<'a> {
    /// Metric name
    pub metric: &'a str,
    /// `[unix_seconds, value]` pairs
    pub points: Vec<(i64, f64)>,
    /// Tags
    pub tags: &'a [String],
    /// Host label
    pub host: &'a str,
    /// Metric kind
    #[serde(rename = "type")]
    pub kind: MetricKind,
}

impl<'a> SeriesPayload<'a> {
    /// Build the payload, stamping every point with `timestamp`
    #[must_use]
    pub fn from_observations(observations: &'a [MetricObservation], timestamp: i64) -> Self {
        let series = observations
            .iter()
            .map(|observation| SeriesEntry {
                metric: &observation.metric_name,
                points: vec![(timestamp, observation.value)],
                tags: &observation.tags,
                host: &observation.host,
                kind: observation.kind,
            })
            .collect();
        Self { series }
    }
}

/// Response body of `POST /api/v1/series`
#[derive(Debug, Deserialize)]
struct SeriesResponse {
    status: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

/// Client for Datadog's metric submission API
pub struct DatadogClient {
    config: DatadogClientConfig,
    http_client: Client,
}

impl DatadogClient {
    /// Create a client using the given HTTP client
    #[must_use]
    pub fn new(config: DatadogClientConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Full URL of the series endpoint
    #[must_use]
    pub fn series_url(&self) -> String {
        format!(
            "{}{SERIES_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Submit the batch and return the status Datadog reports
    ///
    /// # Errors
    /// Returns an error on transport failure or any non-2xx status
    #[instrument(skip_all, fields(count = observations.len()))]
    pub async fn send_metrics(&self, observations: &[MetricObservation]) -> AppResult<String> {
        let payload = SeriesPayload::from_observations(observations, Utc::now().timestamp());
        let body = serde_json::to_string(&payload).map_err(|e| {
            AppError::serialization(format!("Failed to encode series payload: {e}")).with_source(e)
        })?;

        let response = self
            .http_client
            .post(self.series_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(APP_KEY_HEADER, &self.config.app_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.clone())
            .send()
            .await
            .map_err(|e| transport_error(SERVICE_NAME, e))?;

        let response = ensure_success(SERVICE_NAME, response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(SERVICE_NAME, e))?;

        // A 2xx means the series were accepted even if the body is unexpected
        let status = match serde_json::from_str::<SeriesResponse>(&text) {
            Ok(parsed) => {
                for error in &parsed.errors {
                    warn!("Datadog reported: {}", error);
                }
                parsed.status.unwrap_or_else(|| "unknown".to_owned())
            }
            Err(e) => {
                warn!("Unreadable Datadog response body: {}", e);
                "unknown".to_owned()
            }
        };

        info!("Sending metrics to Datadog... {}", status);
        info!("{}", body);
        Ok(status)
    }
}

#[async_trait]
impl MetricSink for DatadogClient {
    async fn submit(&self, observations: &[MetricObservation]) -> AppResult<String> {
        self.send_metrics(observations).await
    }
}
