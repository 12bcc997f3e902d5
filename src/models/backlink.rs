//! Backlink records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_dofollow() -> bool {
    true
}

/// Backlink information for a URL or domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklinkRecord {
    pub source_url: String,
    pub target_url: String,
    #[serde(default)]
    pub anchor_text: Option<String>,
    /// Provider rank of the linking domain
    #[serde(default)]
    pub domain_rank: Option<u32>,
    #[serde(default = "default_dofollow")]
    pub is_dofollow: bool,
    #[serde(default)]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

impl BacklinkRecord {
    pub fn new(source_url: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            target_url: target_url.into(),
            anchor_text: None,
            domain_rank: None,
            is_dofollow: default_dofollow(),
            first_seen: None,
            last_seen: None,
        }
    }
}
