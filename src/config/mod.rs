//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (base URL, defaults, retry parameters)
//! - Provider endpoint paths
//! - Client configuration types
//! - CLI option types and parsing

mod cli;
mod constants;
mod endpoints;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, LocaleArgs};
pub use constants::*;
pub use endpoints::Endpoint;
pub use types::{ClientConfig, Credentials, Locale, LogFormat, LogLevel, RetryPolicy};
