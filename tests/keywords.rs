//! Integration tests for keyword lookup and keyword suggestions.

mod helpers;

use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{api_path, envelope, test_client, TEST_LOGIN, TEST_PASSWORD};
use seo_probe::{ClientError, KeywordResearchRequest, Locale, ModelError};

#[tokio::test]
async fn test_keyword_lookup_sends_authenticated_array_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path(
            "dataforseo_labs/google/bulk_keyword_difficulty/live",
        )))
        .and(basic_auth(TEST_LOGIN, TEST_PASSWORD))
        .and(body_json(json!([{
            "keywords": ["fed rate decision", "fomc preview"],
            "location_code": 2826,
            "language_code": "en"
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"keyword": "fed rate decision", "search_volume": 2400, "competition": 0.31,
             "cpc": 1.15, "keyword_difficulty": 52},
            {"keyword": "fomc preview", "keyword_difficulty": 18, "se_type": "google"}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let keywords = vec!["fed rate decision".to_string(), "fomc preview".to_string()];
    let records = client
        .keyword_lookup(&keywords, &Locale::default())
        .await
        .expect("lookup should succeed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].keyword, "fed rate decision");
    assert_eq!(records[0].search_volume, 2400);
    assert_eq!(records[0].cpc, Some(1.15));
    assert_eq!(records[0].keyword_difficulty, Some(52));

    // Missing metrics fall back to defaults instead of failing
    assert_eq!(records[1].search_volume, 0);
    assert_eq!(records[1].competition, 0.0);
    assert_eq!(records[1].cpc, None);
    assert_eq!(records[1].extra.get("se_type"), Some(&json!("google")));

    for record in &records {
        assert!((0.0..=1.0).contains(&record.competition));
    }
}

#[tokio::test]
async fn test_keyword_lookup_nested_items_layout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path(
            "dataforseo_labs/google/bulk_keyword_difficulty/live",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{
            "se_type": "google",
            "items_count": 1,
            "items": [{"keyword": "interest rate decision", "keyword_difficulty": 40}]
        }]))))
        .mount(&server)
        .await;

    let records = test_client(&server)
        .keyword_lookup(&["interest rate decision".to_string()], &Locale::default())
        .await
        .expect("lookup should succeed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].keyword, "interest rate decision");
    assert_eq!(records[0].keyword_difficulty, Some(40));
}

#[tokio::test]
async fn test_keyword_lookup_empty_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": []})))
        .mount(&server)
        .await;

    let records = test_client(&server)
        .keyword_lookup(&["anything".to_string()], &Locale::default())
        .await
        .expect("empty envelope is not an error");
    assert!(records.is_empty());
}

#[test]
fn test_keyword_research_rejects_empty_request_before_sending() {
    let err = KeywordResearchRequest::new(Vec::new(), Locale::default()).unwrap_err();
    assert!(matches!(err, ModelError::KeywordCount { count: 0, .. }));
    let client_err: ClientError = err.into();
    assert!(client_err.to_string().contains("between 1 and 100"));
}

#[tokio::test]
async fn test_keyword_research_uses_request_locale() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!([{
            "keywords": ["mortgage rates"],
            "location_code": 2840,
            "language_code": "en"
        }])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([{"keyword": "mortgage rates"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request =
        KeywordResearchRequest::new(vec!["mortgage rates".to_string()], Locale::new(2840, "en"))
            .expect("one keyword is valid");
    let records = test_client(&server)
        .keyword_research(&request)
        .await
        .expect("research should succeed");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_keyword_suggestions_unwraps_nested_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("dataforseo_labs/google/keyword_suggestions/live")))
        .and(body_json(json!([{
            "keyword": "federal reserve",
            "location_code": 2826,
            "language_code": "en",
            "limit": 10
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {
                "seed_keyword": "federal reserve",
                "items": [
                    {
                        "keyword": "federal reserve interest rates",
                        "keyword_info": {
                            "search_volume": 14800,
                            "competition": 0.05,
                            "cpc": 2.4,
                            "monthly_searches": [
                                {"year": 2026, "month": 9, "search_volume": 18100},
                                {"year": 2026, "month": 8, "search_volume": 12100}
                            ]
                        },
                        "keyword_properties": {"keyword_difficulty": 67},
                        "search_intent_info": {"main_intent": "informational"}
                    },
                    {"keyword": "federal reserve chair"}
                ]
            },
            {"seed_keyword": "federal reserve", "items": null}
        ]))))
        .mount(&server)
        .await;

    let records = test_client(&server)
        .keyword_suggestions("federal reserve", &Locale::default(), 10)
        .await
        .expect("suggestions should succeed");

    assert_eq!(records.len(), 2);
    let first = &records[0];
    assert_eq!(first.keyword, "federal reserve interest rates");
    assert_eq!(first.search_volume, 14800);
    assert_eq!(first.competition, 0.05);
    assert_eq!(first.cpc, Some(2.4));
    assert_eq!(first.keyword_difficulty, Some(67));
    assert_eq!(first.search_intent.as_deref(), Some("informational"));
    assert_eq!(first.trend, Some(vec![18100, 12100]));

    let second = &records[1];
    assert_eq!(second.search_volume, 0);
    assert_eq!(second.keyword_difficulty, None);
    assert_eq!(second.search_intent, None);
}
