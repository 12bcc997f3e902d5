//! Error handling.
//!
//! This module provides:
//! - Error type definitions for the client, models and initialization
//! - Error categorization for log output
//! - Retry strategy configuration
//!
//! Failures fall into four groups:
//! - **Transport**: HTTP/network failures and non-2xx statuses, retried for POST calls
//! - **Shape**: unexpected response layouts, tolerated by the parsers and never raised
//! - **No match**: a keyword that does not rank, represented as a valid record
//! - **Configuration**: missing credentials or bad settings, raised at construction

mod categorization;
mod types;

// Re-export public API
pub use categorization::get_retry_strategy;
pub use types::{ClientError, ErrorKind, InitializationError, ModelError};
