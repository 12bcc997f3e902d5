//! AI/LLM citation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mention of a domain in an AI assistant's response.
///
/// Unrecognized vendor fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationRecord {
    /// The user query that triggered the mention
    pub query: String,
    /// Which model mentioned the content
    pub llm_model: String,
    #[serde(default)]
    pub mentioned_url: Option<String>,
    pub mentioned_domain: String,
    /// direct_citation, paraphrase, recommendation...
    pub mention_type: String,
    /// Position in the model response, if applicable
    #[serde(default)]
    pub position: Option<u32>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CitationRecord {
    pub fn new(
        query: impl Into<String>,
        llm_model: impl Into<String>,
        mentioned_domain: impl Into<String>,
        mention_type: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            llm_model: llm_model.into(),
            mentioned_url: None,
            mentioned_domain: mentioned_domain.into(),
            mention_type: mention_type.into(),
            position: None,
            timestamp: Utc::now(),
            extra: Map::new(),
        }
    }
}
