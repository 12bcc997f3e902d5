//! SERP rank tracking.

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use serde_json::json;

use super::ProviderClient;
use crate::config::{Endpoint, Locale, DEFAULT_SERP_DEPTH};
use crate::error_handling::ClientError;
use crate::models::{RankingRecord, SerpTrackingRequest};
use crate::parse::find_ranking;

impl ProviderClient {
    /// Ranking position of `target_domain` for one keyword.
    ///
    /// Organic results are scanned in order and the first whose domain contains
    /// `target_domain` as a substring wins, so `example.com` matches
    /// `www.example.com`. When nothing matches, a not-ranking record (no position,
    /// empty URL and title) is returned instead of an error.
    ///
    /// # Arguments
    ///
    /// * `keyword` - Search query to check
    /// * `target_domain` - Domain, or domain fragment, to look for
    /// * `locale` - Location and language of the search
    /// * `depth` - Number of results the provider scans
    ///
    /// # Errors
    ///
    /// Returns the last transport or decode error once the retry budget is spent.
    pub async fn rank_check(
        &self,
        keyword: &str,
        target_domain: &str,
        locale: &Locale,
        depth: u32,
    ) -> Result<RankingRecord, ClientError> {
        let payload = json!([{
            "keyword": keyword,
            "location_code": locale.location_code,
            "language_code": locale.language_code,
            "depth": depth,
        }]);

        let response = self.post(Endpoint::OrganicSerpLive, payload).await?;
        Ok(find_ranking(&response, keyword, target_domain))
    }

    /// Rank checks for many keywords, run concurrently with default locale and depth.
    ///
    /// # Arguments
    ///
    /// * `keywords` - Keywords to check, one request each
    /// * `target_domain` - Domain, or domain fragment, to look for
    ///
    /// # Returns
    ///
    /// Records for the keywords whose check succeeded, in completion order. See
    /// [`track`](Self::track).
    pub async fn batch_rank_check(
        &self,
        keywords: &[String],
        target_domain: &str,
    ) -> Vec<RankingRecord> {
        self.rank_many(keywords, target_domain, &Locale::default(), DEFAULT_SERP_DEPTH)
            .await
    }

    /// Rank checks for every keyword of a tracking request, run concurrently.
    ///
    /// In-flight requests stay bounded by the client's concurrency limit. Keywords
    /// whose check fails are left out of the result without any error, and the
    /// records come back in completion order rather than input order.
    pub async fn track(&self, request: &SerpTrackingRequest) -> Vec<RankingRecord> {
        self.rank_many(
            &request.keywords,
            &request.target_domain,
            &request.locale,
            request.depth,
        )
        .await
    }

    async fn rank_many(
        &self,
        keywords: &[String],
        target_domain: &str,
        locale: &Locale,
        depth: u32,
    ) -> Vec<RankingRecord> {
        let mut checks: FuturesUnordered<_> = keywords
            .iter()
            .map(|keyword| async move {
                (
                    keyword,
                    self.rank_check(keyword, target_domain, locale, depth).await,
                )
            })
            .collect();

        let mut records = Vec::with_capacity(keywords.len());
        while let Some((keyword, result)) = checks.next().await {
            match result {
                Ok(record) => records.push(record),
                Err(e) => log::debug!("Dropping rank check for {keyword:?}: {e}"),
            }
        }
        records
    }
}
