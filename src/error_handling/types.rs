//! Error type definitions.
//!
//! This module defines the errors surfaced to callers of the client and the
//! categories used when logging failed requests.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Credentials could not be turned into an authorization header.
    #[error("Invalid authorization header: {0}")]
    InvalidHeaderError(#[from] reqwest::header::InvalidHeaderValue),
}

/// Validation failures for records and request models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("competition must be within [0, 1], got {0}")]
    CompetitionOutOfRange(f64),

    #[error("keyword difficulty must be within [0, 100], got {0}")]
    DifficultyOutOfRange(u8),

    #[error("trend holds at most {max} monthly values, got {len}")]
    TrendTooLong { len: usize, max: usize },

    #[error("a keyword request needs between {min} and {max} keywords, got {count}")]
    KeywordCount { count: usize, min: usize, max: usize },
}

/// Errors returned by `ProviderClient`.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or non-2xx status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// Response body was not valid JSON.
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A credential environment variable is unset or empty.
    #[error("Missing credentials: {0} must be set")]
    MissingCredentials(&'static str),

    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The concurrency limiter was closed while a request waited for a slot.
    #[error("Concurrency limiter closed")]
    LimiterClosed(#[from] tokio::sync::AcquireError),

    #[error("Invalid request: {0}")]
    Validation(#[from] ModelError),
}

/// Broad categories of client failures.
///
/// Used for log lines; retry behaviour does not depend on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    Timeout,
    Connect,
    RateLimited, // 429 Too Many Requests
    ClientStatus,
    ServerStatus,
    Decode,
    Configuration,
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Connect => "connection error",
            ErrorKind::RateLimited => "rate limited (429)",
            ErrorKind::ClientStatus => "client error (4xx)",
            ErrorKind::ServerStatus => "server error (5xx)",
            ErrorKind::Decode => "decode error",
            ErrorKind::Configuration => "configuration error",
            ErrorKind::Other => "other error",
        }
    }
}
