//! Mapping of vendor items onto typed records.
//!
//! Missing numbers fall back to zero or `None`; out-of-range competition is
//! clamped into [0, 1] and out-of-range difficulty is dropped, so mapping an item
//! never fails.

use std::collections::BTreeSet;

use serde_json::Value;

use super::envelope::{array, task_results};
use super::fields::{
    bool_field, extra_fields, f64_field, str_field, string_field, timestamp_field, u32_field,
    u64_field,
};
use crate::config::{MAX_KEYWORD_DIFFICULTY, TREND_MONTHS};
use crate::models::{BacklinkRecord, CitationRecord, KeywordRecord, RankingRecord};

const ORGANIC_ITEM_TYPE: &str = "organic";
const UNKNOWN_MENTION_TYPE: &str = "unknown";

const BULK_KEYWORD_FIELDS: &[&str] = &[
    "keyword",
    "search_volume",
    "competition",
    "cpc",
    "keyword_difficulty",
    "search_intent",
];
const SUGGESTION_FIELDS: &[&str] = &[
    "keyword",
    "keyword_info",
    "keyword_properties",
    "search_intent_info",
];
const CITATION_FIELDS: &[&str] = &["query", "llm", "url", "mention_type", "position"];

fn competition(raw: Option<f64>) -> f64 {
    raw.map(|c| c.clamp(0.0, 1.0)).unwrap_or(0.0)
}

fn difficulty(raw: Option<u64>) -> Option<u8> {
    raw.filter(|d| *d <= u64::from(MAX_KEYWORD_DIFFICULTY))
        .and_then(|d| u8::try_from(d).ok())
}

/// Keyword entries of a bulk lookup response.
///
/// Results that carry an `items` list contribute those items; results without
/// one are themselves keyword entries.
pub fn keyword_items(response: &Value) -> impl Iterator<Item = &Value> {
    task_results(response).flat_map(|result| match result.get("items") {
        Some(Value::Array(items)) => items.iter().collect::<Vec<_>>(),
        Some(_) => Vec::new(),
        None => vec![result],
    })
}

/// Maps one bulk keyword difficulty item.
pub fn keyword_from_item(item: &Value) -> KeywordRecord {
    KeywordRecord {
        keyword: string_field(item, &["keyword"]).unwrap_or_default(),
        search_volume: u64_field(item, &["search_volume"]).unwrap_or(0),
        competition: competition(f64_field(item, &["competition"])),
        cpc: f64_field(item, &["cpc"]),
        keyword_difficulty: difficulty(u64_field(item, &["keyword_difficulty"])),
        search_intent: string_field(item, &["search_intent"]),
        trend: None,
        extra: extra_fields(item, BULK_KEYWORD_FIELDS),
    }
}

/// Maps one keyword suggestion item, reading its nested info objects.
pub fn keyword_from_suggestion(item: &Value) -> KeywordRecord {
    let trend: Vec<u64> = array(&item["keyword_info"], "monthly_searches")
        .iter()
        .filter_map(|month| u64_field(month, &["search_volume"]))
        .take(TREND_MONTHS)
        .collect();

    KeywordRecord {
        keyword: string_field(item, &["keyword"]).unwrap_or_default(),
        search_volume: u64_field(item, &["keyword_info", "search_volume"]).unwrap_or(0),
        competition: competition(f64_field(item, &["keyword_info", "competition"])),
        cpc: f64_field(item, &["keyword_info", "cpc"]),
        keyword_difficulty: difficulty(u64_field(
            item,
            &["keyword_properties", "keyword_difficulty"],
        )),
        search_intent: string_field(item, &["search_intent_info", "main_intent"]),
        trend: (!trend.is_empty()).then_some(trend),
        extra: extra_fields(item, SUGGESTION_FIELDS),
    }
}

/// Scans organic SERP items in order for the first whose domain contains `target_domain`.
///
/// Returns `RankingRecord::not_ranking` when no organic item matches.
pub fn find_ranking(response: &Value, keyword: &str, target_domain: &str) -> RankingRecord {
    for result in task_results(response) {
        let items = array(result, "items");
        for item in items {
            if str_field(item, &["type"]) != Some(ORGANIC_ITEM_TYPE) {
                continue;
            }
            let domain = str_field(item, &["domain"]).unwrap_or_default();
            if domain.contains(target_domain) {
                return RankingRecord::new(
                    keyword,
                    u32_field(item, &["rank_group"]),
                    str_field(item, &["url"]).unwrap_or_default(),
                    str_field(item, &["title"]).unwrap_or_default(),
                )
                .with_snippet(string_field(item, &["description"]))
                .with_serp_features(serp_features(items));
            }
        }
    }
    RankingRecord::not_ranking(keyword)
}

/// Distinct non-organic item types on a SERP.
fn serp_features(items: &[Value]) -> BTreeSet<String> {
    items
        .iter()
        .filter_map(|item| str_field(item, &["type"]))
        .filter(|kind| *kind != ORGANIC_ITEM_TYPE)
        .map(str::to_string)
        .collect()
}

/// Maps one backlink item.
pub fn backlink_from_item(item: &Value) -> BacklinkRecord {
    BacklinkRecord {
        source_url: string_field(item, &["url_from"]).unwrap_or_default(),
        target_url: string_field(item, &["url_to"]).unwrap_or_default(),
        anchor_text: string_field(item, &["anchor"]),
        domain_rank: u32_field(item, &["domain_from_rank"]),
        is_dofollow: bool_field(item, &["dofollow"]).unwrap_or(true),
        first_seen: timestamp_field(item, &["first_seen"]),
        last_seen: timestamp_field(item, &["last_seen"]),
    }
}

/// Maps one LLM mention item, stamping it with the queried domain.
pub fn citation_from_item(item: &Value, domain: &str) -> CitationRecord {
    let mut record = CitationRecord::new(
        str_field(item, &["query"]).unwrap_or_default(),
        str_field(item, &["llm"]).unwrap_or_default(),
        domain,
        str_field(item, &["mention_type"]).unwrap_or(UNKNOWN_MENTION_TYPE),
    );
    record.mentioned_url = string_field(item, &["url"]);
    record.position = u32_field(item, &["position"]);
    record.extra = extra_fields(item, CITATION_FIELDS);
    record
}
