// ABOUTME: HTTP client construction and response status handling for external calls
// ABOUTME: Clients carry the monitor user agent and no request timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::http::USER_AGENT;
use crate::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder, Response};

/// Longest slice of an error body kept in error messages
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Create the HTTP client used for `SportID` and Datadog calls
///
/// No request or connect timeout is configured: each cycle makes exactly one
/// attempt per service and waits for it to finish.
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialized
pub fn create_client() -> AppResult<Client> {
    create_custom_client(|builder| builder)
}

/// Create an HTTP client with extra builder configuration
///
/// The monitor user agent is applied before `config_fn` runs.
///
/// # Errors
/// Returns an error if the client cannot be built
pub fn create_custom_client<F>(config_fn: F) -> AppResult<Client>
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    config_fn(ClientBuilder::new().user_agent(USER_AGENT))
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e))
}

/// Pass through a successful response, or turn a non-2xx one into an error
///
/// # Errors
/// Returns an `AppError` carrying the status and a truncated response body
pub async fn ensure_success(service: &str, response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    Err(AppError::http_status(service, status.as_u16(), body))
}

/// Map a transport-level failure (connect, DNS, TLS, body read)
pub fn transport_error(service: &str, error: reqwest::Error) -> AppError {
    AppError::unavailable(service, error.to_string()).with_source(error)
}
