//! Command execution for the CLI binary.
//!
//! Maps a parsed subcommand onto the matching client operation and returns the
//! result as JSON for printing.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::client::ProviderClient;
use crate::config::Command;
use crate::models::{KeywordResearchRequest, SerpTrackingRequest};

/// Runs one subcommand against the provider.
///
/// # Errors
///
/// Returns an error if the request fails after retries or the input does not
/// validate (for example more than 100 keywords).
pub async fn execute(client: &ProviderClient, command: Command) -> Result<Value> {
    let value = match command {
        Command::Keywords { keywords, locale } => {
            let request = KeywordResearchRequest::new(keywords, locale.into())
                .context("Invalid keyword list")?;
            serde_json::to_value(client.keyword_research(&request).await?)?
        }
        Command::Suggest {
            seed,
            locale,
            limit,
        } => serde_json::to_value(
            client
                .keyword_suggestions(&seed, &locale.into(), limit)
                .await?,
        )?,
        Command::Rank {
            keyword,
            domain,
            locale,
            depth,
        } => serde_json::to_value(
            client
                .rank_check(&keyword, &domain, &locale.into(), depth)
                .await?,
        )?,
        Command::BatchRank {
            keywords,
            domain,
            locale,
            depth,
        } => {
            let requested = keywords.len();
            let mut request = SerpTrackingRequest::new(keywords, domain);
            request.locale = locale.into();
            request.depth = depth;
            let records = client.track(&request).await;
            log::info!("Checked {} of {} keywords", records.len(), requested);
            serde_json::to_value(records)?
        }
        Command::Citations { domain, limit } => {
            serde_json::to_value(client.ai_citations(&domain, limit).await?)?
        }
        Command::Probe { query, model } => client.ai_response_probe(&query, &model).await?,
        Command::Backlinks { target, limit } => {
            serde_json::to_value(client.backlinks(&target, limit).await?)?
        }
        Command::Balance => Value::Object(client.account_balance().await?),
    };
    Ok(value)
}
