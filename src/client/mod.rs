//! DataForSEO API client.
//!
//! `ProviderClient` authenticates every request, bounds the number of requests
//! in flight, retries POST calls and maps the provider's JSON envelopes into
//! typed records. Operations are grouped by API family:
//! - `keywords`: bulk keyword data and keyword suggestions (DataForSEO Labs)
//! - `serp`: single and batch rank checks (SERP API)
//! - `ai`: LLM mention search and live LLM responses (AI Optimization API)
//! - `backlinks`: backlinks to a URL (Backlinks API)
//! - `account`: balance and usage (Appendix API)

mod account;
mod ai;
mod backlinks;
mod keywords;
mod serp;

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tokio::sync::Semaphore;
use url::Url;

use crate::config::{ClientConfig, Credentials, Endpoint, RetryPolicy};
use crate::error_handling::ClientError;
use crate::initialization::{init_client, init_semaphore};
use crate::utils::with_retry;

/// Async client for the DataForSEO API.
///
/// Cloning is cheap; clones share the HTTP connection pool and the concurrency limit.
///
/// # Example
///
/// ```no_run
/// use seo_probe::{ClientConfig, Credentials, Locale, ProviderClient};
///
/// # async fn example() -> Result<(), seo_probe::ClientError> {
/// let client = ProviderClient::new(
///     Credentials::new("me@example.com", "api-password"),
///     ClientConfig::default(),
/// )?;
///
/// let keywords = client
///     .keyword_lookup(&["fed rate decision".to_string()], &Locale::default())
///     .await?;
/// let ranking = client
///     .rank_check("fed rate decision", "example.substack.com", &Locale::default(), 100)
///     .await?;
/// println!("{} keywords, ranking: {}", keywords.len(), ranking.is_ranking());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: Url,
    semaphore: Arc<Semaphore>,
    retry: RetryPolicy,
}

impl ProviderClient {
    /// Creates a client. The authorization header is built once here.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if the base URL does not parse, or
    /// `ClientError::Initialization` if the HTTP client cannot be built.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = init_client(&config, &credentials)?;
        Ok(Self {
            http,
            base_url,
            semaphore: init_semaphore(config.max_concurrency),
            retry: config.retry,
        })
    }

    /// Creates a client with credentials from `DATAFORSEO_LOGIN` and `DATAFORSEO_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingCredentials` immediately if either variable is
    /// unset or empty.
    pub fn from_env(config: ClientConfig) -> Result<Self, ClientError> {
        Self::new(Credentials::from_env()?, config)
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ClientError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|source| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }

    /// Performs one HTTP call while holding a concurrency slot.
    ///
    /// Non-2xx statuses are returned as `ClientError::Http`. The slot is released
    /// when this future completes or is dropped.
    async fn request(
        &self,
        method: Method,
        endpoint: Endpoint,
        payload: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let _permit = self.semaphore.acquire().await?;
        let url = self.endpoint_url(endpoint)?;
        log::debug!("{method} {endpoint}");

        let mut builder = self.http.request(method, url);
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        let response = builder.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET without retries.
    async fn get(&self, endpoint: Endpoint) -> Result<Value, ClientError> {
        self.request(Method::GET, endpoint, None).await
    }

    /// POST with the client's retry policy.
    ///
    /// `payload` is the provider's array-of-tasks body, even for a single request.
    async fn post(&self, endpoint: Endpoint, payload: Value) -> Result<Value, ClientError> {
        let this = self;
        let payload = &payload;
        with_retry(&self.retry, endpoint.path(), move || {
            this.request(Method::POST, endpoint, Some(payload))
        })
        .await
    }
}

/// Parses the base URL, making sure relative endpoint paths are appended to it.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|source| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}
