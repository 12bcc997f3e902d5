//! Keyword research (DataForSEO Labs).

use serde_json::json;

use super::ProviderClient;
use crate::config::{Endpoint, Locale};
use crate::error_handling::ClientError;
use crate::models::{KeywordRecord, KeywordResearchRequest};
use crate::parse::{keyword_from_item, keyword_from_suggestion, keyword_items, result_items};

impl ProviderClient {
    /// Search volume, competition, cost per click and difficulty for a list of keywords.
    ///
    /// # Arguments
    ///
    /// * `keywords` - Keywords to look up (the provider accepts up to 100 per task)
    /// * `locale` - Location and language the metrics are computed for
    ///
    /// # Returns
    ///
    /// One record per keyword the provider returned; keywords it omits are
    /// simply absent. Missing metrics read as zero or `None`.
    ///
    /// # Errors
    ///
    /// Returns the last transport or decode error once the retry budget is spent.
    pub async fn keyword_lookup(
        &self,
        keywords: &[String],
        locale: &Locale,
    ) -> Result<Vec<KeywordRecord>, ClientError> {
        let payload = json!([{
            "keywords": keywords,
            "location_code": locale.location_code,
            "language_code": locale.language_code,
        }]);

        let response = self.post(Endpoint::BulkKeywordDifficulty, payload).await?;
        Ok(keyword_items(&response).map(keyword_from_item).collect())
    }

    /// Same as [`keyword_lookup`](Self::keyword_lookup) for a validated request.
    pub async fn keyword_research(
        &self,
        request: &KeywordResearchRequest,
    ) -> Result<Vec<KeywordRecord>, ClientError> {
        self.keyword_lookup(request.keywords(), &request.locale)
            .await
    }

    /// Keyword ideas related to a seed keyword.
    ///
    /// Metrics come from each suggestion's nested `keyword_info`,
    /// `keyword_properties` and `search_intent_info` objects.
    ///
    /// # Arguments
    ///
    /// * `seed_keyword` - Keyword the suggestions are built around
    /// * `locale` - Location and language for the suggestions
    /// * `limit` - Maximum number of suggestions
    ///
    /// # Returns
    ///
    /// One record per suggestion, with `trend` holding up to 12 monthly volumes
    /// when the provider reports them.
    ///
    /// # Errors
    ///
    /// Returns the last transport or decode error once the retry budget is spent.
    pub async fn keyword_suggestions(
        &self,
        seed_keyword: &str,
        locale: &Locale,
        limit: u32,
    ) -> Result<Vec<KeywordRecord>, ClientError> {
        let payload = json!([{
            "keyword": seed_keyword,
            "location_code": locale.location_code,
            "language_code": locale.language_code,
            "limit": limit,
        }]);

        let response = self.post(Endpoint::KeywordSuggestions, payload).await?;
        Ok(result_items(&response)
            .map(keyword_from_suggestion)
            .collect())
    }
}
