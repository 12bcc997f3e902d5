//! Provider endpoint paths.
//!
//! All paths are relative to the configured base URL (which already carries the
//! `/v3` version prefix) and never start with a slash.

use strum_macros::EnumIter as EnumIterMacro;

/// Vendor endpoints consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Endpoint {
    /// DataForSEO Labs bulk keyword difficulty
    BulkKeywordDifficulty,
    /// DataForSEO Labs keyword suggestions
    KeywordSuggestions,
    /// Google organic SERP, live mode
    OrganicSerpLive,
    /// AI optimization: LLM mention search
    LlmMentionsSearch,
    /// AI optimization: live LLM responses
    LlmResponsesLive,
    /// Backlinks, live mode
    BacklinksLive,
    /// Account and balance data
    UserData,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::BulkKeywordDifficulty => "dataforseo_labs/google/bulk_keyword_difficulty/live",
            Endpoint::KeywordSuggestions => "dataforseo_labs/google/keyword_suggestions/live",
            Endpoint::OrganicSerpLive => "serp/google/organic/live/regular",
            Endpoint::LlmMentionsSearch => "ai_optimization/llm_mentions/search/live",
            Endpoint::LlmResponsesLive => "ai_optimization/llm_responses/live",
            Endpoint::BacklinksLive => "backlinks/backlinks/live",
            Endpoint::UserData => "appendix/user_data",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
