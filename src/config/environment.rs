// ABOUTME: Environment configuration for credentials, host label, and poll interval
// ABOUTME: Builds an immutable MonitorConfig once at startup and validates every value
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file). The resulting [`MonitorConfig`] is read-only and handed to
//! each component by reference.

use crate::constants::{datadog, env_keys, schedule, sportid};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime configuration for the monitor
#[derive(Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Value of the `SportID` session cookie
    pub session_cookie: String,
    /// Datadog API key
    pub api_key: String,
    /// Datadog application key
    pub app_key: String,
    /// Host label attached to every observation, empty when unset
    pub host: String,
    /// Poll period in seconds
    pub interval_secs: u64,
    /// Whether the first cycle fires immediately instead of after one interval
    pub run_on_start: bool,
    /// `SportID` API base URL
    pub sportid_api_base: String,
    /// `SportID` account whose overview is polled
    pub sportid_user_id: u64,
    /// Datadog API base URL
    pub datadog_api_base: String,
}

impl MonitorConfig {
    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or any value is invalid
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        if let Some(path) = load_dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or any value is invalid
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> AppResult<String> {
            lookup(key).ok_or_else(|| AppError::config_missing(key))
        };

        let interval_secs = match lookup(env_keys::INTERVAL) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::config_invalid(env_keys::INTERVAL, "must be a whole number of seconds")
                    .with_source(e)
            })?,
            None => schedule::DEFAULT_INTERVAL_SECS,
        };

        let run_on_start = match lookup(env_keys::RUN_ON_START) {
            Some(raw) => parse_bool(env_keys::RUN_ON_START, &raw)?,
            None => true,
        };

        let sportid_user_id = match lookup(env_keys::SPORTID_USER_ID) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::config_invalid(env_keys::SPORTID_USER_ID, "must be a numeric user id")
                    .with_source(e)
            })?,
            None => sportid::DEFAULT_USER_ID,
        };

        let config = Self {
            session_cookie: required(env_keys::COOKIE)?,
            api_key: required(env_keys::API_KEY)?,
            app_key: required(env_keys::APP_KEY)?,
            host: lookup(env_keys::HOST).unwrap_or_default(),
            interval_secs,
            run_on_start,
            sportid_api_base: lookup(env_keys::SPORTID_API_BASE)
                .unwrap_or_else(|| sportid::API_BASE.to_owned()),
            sportid_user_id,
            datadog_api_base: lookup(env_keys::DATADOG_API_BASE)
                .unwrap_or_else(|| datadog::API_BASE.to_owned()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is blank or a base URL is not HTTP(S)
    pub fn validate(&self) -> AppResult<()> {
        for (key, value) in [
            (env_keys::COOKIE, &self.session_cookie),
            (env_keys::API_KEY, &self.api_key),
            (env_keys::APP_KEY, &self.app_key),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_invalid(key, "cannot be empty"));
            }
        }

        for (key, value) in [
            (env_keys::SPORTID_API_BASE, &self.sportid_api_base),
            (env_keys::DATADOG_API_BASE, &self.datadog_api_base),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(AppError::config_invalid(key, "must be an http(s) URL"));
            }
        }

        Ok(())
    }

    /// One-line summary safe to log (secrets omitted)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "interval={}s run_on_start={} host={:?} sportid={} user={} datadog={}",
            self.interval_secs,
            self.run_on_start,
            self.host,
            self.sportid_api_base,
            self.sportid_user_id,
            self.datadog_api_base,
        )
    }
}

impl fmt::Debug for MonitorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorConfig")
            .field("session_cookie", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .field("app_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("interval_secs", &self.interval_secs)
            .field("run_on_start", &self.run_on_start)
            .field("sportid_api_base", &self.sportid_api_base)
            .field("sportid_user_id", &self.sportid_user_id)
            .field("datadog_api_base", &self.datadog_api_base)
            .finish()
    }
}

/// Seed the process environment from a `.env` file in the working directory
///
/// Variables already set are left untouched. Call this before anything else
/// reads the environment, including logging setup.
#[must_use]
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("No .env file loaded: {}", e);
            None
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config_invalid(key, "must be true or false")),
    }
}
