//! HTTP client initialization.
//!
//! This module builds the single `reqwest::Client` a `ProviderClient` reuses for
//! its lifetime, with the authorization header attached to every request.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::ClientBuilder;

use crate::config::{ClientConfig, Credentials};
use crate::error_handling::InitializationError;

/// Builds the Basic authorization header value for a credential pair.
///
/// The value is `Basic base64("login:password")` and is marked sensitive so it
/// is left out of `Debug` output.
///
/// # Errors
///
/// Returns `InitializationError::InvalidHeaderError` if the encoded value is not
/// a valid header value.
pub fn basic_auth_header(credentials: &Credentials) -> Result<HeaderValue, InitializationError> {
    let encoded = BASE64_STANDARD.encode(format!(
        "{}:{}",
        credentials.login, credentials.password
    ));
    let mut header = HeaderValue::from_str(&format!("Basic {encoded}"))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Initializes the HTTP client for provider requests.
///
/// Creates a `reqwest::Client` configured with:
/// - Basic authorization and JSON content-type default headers
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
///
/// # Errors
///
/// Returns an `InitializationError` if the header cannot be built or client
/// creation fails.
pub fn init_client(
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<reqwest::Client, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, basic_auth_header(credentials)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = ClientBuilder::new()
        .default_headers(headers)
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
