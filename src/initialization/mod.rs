//! Client initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources a
//! `ProviderClient` owns:
//! - HTTP client (with authorization header and timeout)
//! - Concurrency limiter
//! - Logger (for the CLI binary and other applications)

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::{basic_auth_header, init_client};
pub use logger::init_logger_with;

/// Initializes a semaphore for bounding in-flight requests.
///
/// A count of zero would block every request forever, so it is raised to one.
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across multiple tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}
