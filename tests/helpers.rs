// Shared test helpers for mock provider setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test binary uses a different subset

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::MockServer;

use seo_probe::{ClientConfig, Credentials, ProviderClient, RetryPolicy};

pub const TEST_LOGIN: &str = "tester@example.com";
pub const TEST_PASSWORD: &str = "api-password";

/// Path prefix the mock server is mounted under (mirrors the real `/v3`).
pub const API_PREFIX: &str = "/v3";

/// Builds the mock path for a relative endpoint path.
pub fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}/{endpoint}")
}

/// Client config pointing at the mock server, with instant retries.
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}{}", server.uri(), API_PREFIX),
        timeout: Duration::from_secs(5),
        retry: RetryPolicy::immediate(3),
        ..Default::default()
    }
}

pub fn test_client(server: &MockServer) -> ProviderClient {
    test_client_with(test_config(server))
}

pub fn test_client_with(config: ClientConfig) -> ProviderClient {
    ProviderClient::new(Credentials::new(TEST_LOGIN, TEST_PASSWORD), config)
        .expect("Failed to build test client")
}

/// Wraps result entries in the provider's task envelope.
pub fn envelope(results: Value) -> Value {
    json!({
        "version": "0.1.20250101",
        "status_code": 20000,
        "status_message": "Ok.",
        "tasks_count": 1,
        "tasks": [{
            "id": "01011200-0000-0000-0000-000000000000",
            "status_code": 20000,
            "status_message": "Ok.",
            "result": results
        }]
    })
}

/// SERP envelope whose organic results come from `(domain, rank_group)` pairs.
pub fn serp_envelope(keyword: &str, organic: &[(&str, u32)]) -> Value {
    let items: Vec<Value> = organic
        .iter()
        .map(|(domain, rank)| {
            json!({
                "type": "organic",
                "rank_group": rank,
                "rank_absolute": rank,
                "domain": domain,
                "url": format!("https://{domain}/{}", keyword.replace(' ', "-")),
                "title": format!("{keyword} - {domain}"),
                "description": format!("About {keyword}")
            })
        })
        .collect();
    envelope(json!([{ "keyword": keyword, "items_count": items.len(), "items": items }]))
}
