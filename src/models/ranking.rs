//! SERP ranking records.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{RANKING_POSITION_LIMIT, TOP_TEN_POSITION_LIMIT};

/// SERP tracking result for a specific keyword.
///
/// A missing `position` means the target was not found within the queried depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRecord {
    pub keyword: String,
    pub position: Option<u32>,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub snippet: Option<String>,
    /// Featured snippets, people also ask, etc.
    #[serde(default)]
    pub serp_features: BTreeSet<String>,
    pub timestamp: DateTime<Utc>,
}

impl RankingRecord {
    pub fn new(
        keyword: impl Into<String>,
        position: Option<u32>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            position,
            url: url.into(),
            title: title.into(),
            snippet: None,
            serp_features: BTreeSet::new(),
            timestamp: Utc::now(),
        }
    }

    /// Record for a keyword the target does not rank for.
    pub fn not_ranking(keyword: impl Into<String>) -> Self {
        Self::new(keyword, None, "", "")
    }

    pub fn with_snippet(mut self, snippet: Option<String>) -> Self {
        self.snippet = snippet;
        self
    }

    pub fn with_serp_features(mut self, features: BTreeSet<String>) -> Self {
        self.serp_features = features;
        self
    }

    pub fn is_ranking(&self) -> bool {
        matches!(self.position, Some(p) if p <= RANKING_POSITION_LIMIT)
    }

    pub fn is_top_10(&self) -> bool {
        matches!(self.position, Some(p) if p <= TOP_TEN_POSITION_LIMIT)
    }
}
