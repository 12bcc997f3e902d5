//! Utility functions.
//!
//! This module provides:
//! - The retry driver used by POST calls

mod retry;

pub(crate) use retry::with_retry;
