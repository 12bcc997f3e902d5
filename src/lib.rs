//! seo_probe library: a typed async client for the DataForSEO API
//!
//! This library wraps the provider's REST endpoints for keyword research,
//! SERP rank tracking, backlink lookup and AI/LLM citation monitoring.
//! Requests are authenticated with Basic auth, bounded by a per-client
//! concurrency limit, and POST calls are retried with exponential backoff.
//!
//! # Example
//!
//! ```no_run
//! use seo_probe::{ClientConfig, ProviderClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ProviderClient::from_env(ClientConfig::default())?;
//!
//! let keywords = vec!["fed rate decision".to_string(), "fomc preview".to_string()];
//! let rankings = client
//!     .batch_rank_check(&keywords, "example.substack.com")
//!     .await;
//! for ranking in rankings.iter().filter(|r| r.is_top_10()) {
//!     println!("{} ranks #{:?}", ranking.keyword, ranking.position);
//! }
//!
//! let mentions = client.ai_citations("example.substack.com", 100).await?;
//! println!("{} AI citations", mentions.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Runtime
//!
//! Every client operation is async and expects to be polled on a Tokio runtime.

mod app;
mod client;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod models;
pub mod parse;
mod utils;

// Re-export public API
pub use app::execute;
pub use client::ProviderClient;
pub use config::{
    Cli, ClientConfig, Command, Credentials, Endpoint, Locale, LogFormat, LogLevel, RetryPolicy,
};
pub use error_handling::{ClientError, ErrorKind, InitializationError, ModelError};
pub use models::{
    BacklinkRecord, CitationRecord, KeywordRecord, KeywordResearchRequest, RankingRecord,
    SerpTrackingRequest,
};
