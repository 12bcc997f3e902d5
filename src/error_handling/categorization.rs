//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::{ClientError, ErrorKind};
use crate::config::{RetryPolicy, HTTP_STATUS_TOO_MANY_REQUESTS, RETRY_BACKOFF_BASE};

/// Creates an exponential backoff retry strategy for a policy.
///
/// The iterator yields the waits between attempts, so it holds
/// `max_attempts - 1` delays: `2 * unit`, `4 * unit`, ... each capped at
/// `max_delay`.
pub fn get_retry_strategy(policy: &RetryPolicy) -> impl Iterator<Item = Duration> {
    let unit_ms = u64::try_from(policy.backoff_unit.as_millis()).unwrap_or(u64::MAX);
    ExponentialBackoff::from_millis(RETRY_BACKOFF_BASE)
        .factor(unit_ms)
        .max_delay(policy.max_delay)
        .take(policy.max_attempts.saturating_sub(1))
}

/// Categorizes a `ClientError` into an `ErrorKind`.
pub fn categorize_error(error: &ClientError) -> ErrorKind {
    match error {
        ClientError::Http(e) => categorize_reqwest_error(e),
        ClientError::Decode(_) => ErrorKind::Decode,
        ClientError::MissingCredentials(_)
        | ClientError::InvalidBaseUrl { .. }
        | ClientError::Initialization(_)
        | ClientError::Validation(_) => ErrorKind::Configuration,
        ClientError::LimiterClosed(_) => ErrorKind::Other,
    }
}

/// Categorizes a `reqwest::Error`, checking the HTTP status first.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorKind {
    if let Some(status) = error.status() {
        if status.as_u16() == HTTP_STATUS_TOO_MANY_REQUESTS {
            return ErrorKind::RateLimited;
        }
        if status.is_client_error() {
            return ErrorKind::ClientStatus;
        }
        if status.is_server_error() {
            return ErrorKind::ServerStatus;
        }
    }

    if error.is_timeout() {
        ErrorKind::Timeout
    } else if error.is_connect() {
        ErrorKind::Connect
    } else if error.is_decode() {
        ErrorKind::Decode
    } else if error.is_builder() {
        ErrorKind::Configuration
    } else {
        ErrorKind::Other
    }
}

impl ClientError {
    /// Category of this error, for logging.
    pub fn kind(&self) -> ErrorKind {
        categorize_error(self)
    }
}
