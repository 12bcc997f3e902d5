//! AI/LLM mention tracking (AI Optimization API).

use serde_json::{json, Value};

use super::ProviderClient;
use crate::config::Endpoint;
use crate::error_handling::ClientError;
use crate::models::CitationRecord;
use crate::parse::{citation_from_item, result_items};

impl ProviderClient {
    /// Mentions of `domain` in AI assistant responses (ChatGPT, Claude, Perplexity...).
    ///
    /// Every record's `mentioned_domain` is the queried domain, whatever the
    /// provider reports for the item.
    ///
    /// # Arguments
    ///
    /// * `domain` - Domain whose mentions are searched
    /// * `limit` - Maximum number of mentions
    ///
    /// # Errors
    ///
    /// Returns the last transport or decode error once the retry budget is spent.
    pub async fn ai_citations(
        &self,
        domain: &str,
        limit: u32,
    ) -> Result<Vec<CitationRecord>, ClientError> {
        let payload = json!([{
            "target": domain,
            "limit": limit,
        }]);

        let response = self.post(Endpoint::LlmMentionsSearch, payload).await?;
        Ok(result_items(&response)
            .map(|item| citation_from_item(item, domain))
            .collect())
    }

    /// What a model answers to `query`, as the provider's unparsed response.
    ///
    /// # Returns
    ///
    /// The whole response envelope, unvalidated, for the caller to inspect.
    pub async fn ai_response_probe(&self, query: &str, model: &str) -> Result<Value, ClientError> {
        let payload = json!([{
            "prompt": query,
            "model": model,
        }]);

        self.post(Endpoint::LlmResponsesLive, payload).await
    }
}
