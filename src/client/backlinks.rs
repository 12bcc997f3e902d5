//! Backlink lookup (Backlinks API).

use serde_json::json;

use super::ProviderClient;
use crate::config::{Endpoint, BACKLINK_MODE_EXACT};
use crate::error_handling::ClientError;
use crate::models::BacklinkRecord;
use crate::parse::{backlink_from_item, result_items};

impl ProviderClient {
    /// Backlinks pointing at exactly `target` (the URL is matched as-is).
    ///
    /// # Arguments
    ///
    /// * `target` - URL or domain the backlinks point at
    /// * `limit` - Maximum number of backlinks
    ///
    /// # Returns
    ///
    /// One record per backlink item; links without a `dofollow` flag count as dofollow.
    pub async fn backlinks(
        &self,
        target: &str,
        limit: u32,
    ) -> Result<Vec<BacklinkRecord>, ClientError> {
        let payload = json!([{
            "target": target,
            "limit": limit,
            "mode": BACKLINK_MODE_EXACT,
        }]);

        let response = self.post(Endpoint::BacklinksLive, payload).await?;
        Ok(result_items(&response).map(backlink_from_item).collect())
    }
}
