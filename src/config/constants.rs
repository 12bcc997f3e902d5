//! Configuration constants.
//!
//! This module defines the provider endpoints, request defaults and retry
//! parameters used throughout the client.

use std::time::Duration;

/// Base URL of the DataForSEO v3 REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com/v3";

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("seo_probe/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum simultaneous in-flight requests (semaphore size)
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

// Environment variables read by `Credentials::from_env`
pub const LOGIN_ENV_VAR: &str = "DATAFORSEO_LOGIN";
pub const PASSWORD_ENV_VAR: &str = "DATAFORSEO_PASSWORD";

// Request defaults
/// Location code for the United Kingdom (US is 2840)
pub const DEFAULT_LOCATION_CODE: u32 = 2826;
pub const DEFAULT_LANGUAGE_CODE: &str = "en";
/// How many SERP results to scan when checking a ranking
pub const DEFAULT_SERP_DEPTH: u32 = 100;
pub const DEFAULT_SUGGESTION_LIMIT: u32 = 50;
pub const DEFAULT_CITATION_LIMIT: u32 = 100;
pub const DEFAULT_BACKLINK_LIMIT: u32 = 100;
pub const DEFAULT_PROBE_MODEL: &str = "gpt-4";
/// Backlink matching mode requesting exact-URL semantics
pub const BACKLINK_MODE_EXACT: &str = "as_is";

// Keyword research request bounds
pub const MIN_KEYWORDS_PER_REQUEST: usize = 1;
pub const MAX_KEYWORDS_PER_REQUEST: usize = 100;

/// Highest value the provider uses for keyword difficulty
pub const MAX_KEYWORD_DIFFICULTY: u8 = 100;
/// Rank positions beyond this are not considered ranking
pub const RANKING_POSITION_LIMIT: u32 = 100;
pub const TOP_TEN_POSITION_LIMIT: u32 = 10;
/// Length of the monthly search volume trend
pub const TREND_MONTHS: usize = 12;

// Retry strategy
/// Maximum number of attempts for POST calls (including the initial attempt)
pub const RETRY_MAX_ATTEMPTS: usize = 3;
/// Base of the exponential backoff: waits are 2, 4, 8... units
pub const RETRY_BACKOFF_BASE: u64 = 2;
/// Time unit the backoff base is multiplied by
pub const RETRY_BACKOFF_UNIT: Duration = Duration::from_secs(1);
/// Maximum delay between attempts
pub const RETRY_MAX_DELAY: Duration = Duration::from_secs(10);

// HTTP status codes
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
