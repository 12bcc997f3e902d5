//! Safe field extraction from vendor JSON.
//!
//! Extractors never fail: a missing key, a null or a value of the wrong type
//! all read as `None`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// Timestamp layouts used by the provider (`2019-11-15 12:57:46 +00:00`).
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %:z", "%Y-%m-%d %H:%M:%S %z"];

/// Follows a path of object keys.
pub(crate) fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(key))
}

pub(crate) fn str_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    path(value, keys).and_then(Value::as_str)
}

pub(crate) fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    str_field(value, keys).map(str::to_string)
}

/// Non-negative integer; whole floats such as `1200.0` are accepted.
pub(crate) fn u64_field(value: &Value, keys: &[&str]) -> Option<u64> {
    let v = path(value, keys)?;
    v.as_u64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

pub(crate) fn u32_field(value: &Value, keys: &[&str]) -> Option<u32> {
    u64_field(value, keys).and_then(|v| u32::try_from(v).ok())
}

pub(crate) fn f64_field(value: &Value, keys: &[&str]) -> Option<f64> {
    path(value, keys).and_then(Value::as_f64)
}

pub(crate) fn bool_field(value: &Value, keys: &[&str]) -> Option<bool> {
    path(value, keys).and_then(Value::as_bool)
}

pub(crate) fn timestamp_field(value: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    str_field(value, keys).and_then(parse_timestamp)
}

/// Parses a provider timestamp, falling back to RFC 3339 and a bare UTC datetime.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Copies every top-level key of `value` not listed in `known`.
pub(crate) fn extra_fields(value: &Value, known: &[&str]) -> Map<String, Value> {
    value
        .as_object()
        .map(|object| {
            object
                .iter()
                .filter(|(key, _)| !known.contains(&key.as_str()))
                .map(|(key, v)| (key.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default()
}
