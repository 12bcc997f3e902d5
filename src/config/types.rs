//! Configuration types.
//!
//! This module defines the structs used to configure a `ProviderClient` and the
//! enums shared with command-line parsing.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use log::LevelFilter;

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_LANGUAGE_CODE, DEFAULT_LOCATION_CODE, DEFAULT_MAX_CONCURRENCY,
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, LOGIN_ENV_VAR, PASSWORD_ENV_VAR, RETRY_BACKOFF_UNIT,
    RETRY_MAX_ATTEMPTS, RETRY_MAX_DELAY,
};
use crate::error_handling::ClientError;

/// Verbosity for `--log-level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Log line format for `--log-format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored text: time, target, level, message
    Plain,
    /// One JSON object per line with `ts`, `level`, `target` and `msg`
    Json,
}

/// API login and password.
///
/// Combined into a single Basic authorization header when the client is built.
/// The password is never printed by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Reads credentials from `DATAFORSEO_LOGIN` and `DATAFORSEO_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingCredentials` naming the first variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds credentials from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ClientError::MissingCredentials(name))
        };
        let login = read(LOGIN_ENV_VAR)?;
        let password = read(PASSWORD_ENV_VAR)?;
        Ok(Self { login, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Retry policy for POST calls.
///
/// Attempt `n` (1-based) that fails is followed by a wait of
/// `2^n * backoff_unit`, capped at `max_delay`. With the defaults that is 2s, then 4s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: usize,
    pub backoff_unit: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_MAX_ATTEMPTS,
            backoff_unit: RETRY_BACKOFF_UNIT,
            max_delay: RETRY_MAX_DELAY,
        }
    }
}

impl RetryPolicy {
    /// A policy that retries immediately, for tests and local tooling.
    pub fn immediate(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            backoff_unit: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }
}

/// Search locale sent with keyword and SERP requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Provider location code (UK=2826, US=2840)
    pub location_code: u32,
    pub language_code: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            location_code: DEFAULT_LOCATION_CODE,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }
}

impl Locale {
    pub fn new(location_code: u32, language_code: impl Into<String>) -> Self {
        Self {
            location_code,
            language_code: language_code.into(),
        }
    }
}

/// Client configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use seo_probe::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     timeout: Duration::from_secs(60),
///     max_concurrency: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the version prefix
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Maximum simultaneous in-flight requests
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Retry policy for POST calls
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}
