//! Keyword research records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{MAX_KEYWORD_DIFFICULTY, TREND_MONTHS};
use crate::error_handling::ModelError;

/// Keyword research data from DataForSEO Labs.
///
/// Unrecognized vendor fields are kept in `extra` instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    /// Monthly search volume
    pub search_volume: u64,
    /// Competition level in [0, 1]
    pub competition: f64,
    /// Cost per click (USD)
    #[serde(default)]
    pub cpc: Option<f64>,
    /// Difficulty score in [0, 100]
    #[serde(default)]
    pub keyword_difficulty: Option<u8>,
    /// informational, commercial, transactional, navigational...
    #[serde(default)]
    pub search_intent: Option<String>,
    /// Monthly search volumes, most recent first (up to 12 months)
    #[serde(default)]
    pub trend: Option<Vec<u64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KeywordRecord {
    /// Creates a record with only the required fields.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::CompetitionOutOfRange` if `competition` is outside [0, 1] or NaN.
    pub fn new(
        keyword: impl Into<String>,
        search_volume: u64,
        competition: f64,
    ) -> Result<Self, ModelError> {
        if !(0.0..=1.0).contains(&competition) {
            return Err(ModelError::CompetitionOutOfRange(competition));
        }
        Ok(Self {
            keyword: keyword.into(),
            search_volume,
            competition,
            cpc: None,
            keyword_difficulty: None,
            search_intent: None,
            trend: None,
            extra: Map::new(),
        })
    }

    pub fn with_cpc(mut self, cpc: f64) -> Self {
        self.cpc = Some(cpc);
        self
    }

    pub fn with_difficulty(mut self, difficulty: u8) -> Result<Self, ModelError> {
        if difficulty > MAX_KEYWORD_DIFFICULTY {
            return Err(ModelError::DifficultyOutOfRange(difficulty));
        }
        self.keyword_difficulty = Some(difficulty);
        Ok(self)
    }

    pub fn with_search_intent(mut self, intent: impl Into<String>) -> Self {
        self.search_intent = Some(intent.into());
        self
    }

    pub fn with_trend(mut self, trend: Vec<u64>) -> Result<Self, ModelError> {
        if trend.len() > TREND_MONTHS {
            return Err(ModelError::TrendTooLong {
                len: trend.len(),
                max: TREND_MONTHS,
            });
        }
        self.trend = Some(trend);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_record_required_fields_only() {
        let kw = KeywordRecord::new("test keyword", 1000, 0.5).expect("valid record");
        assert_eq!(kw.keyword, "test keyword");
        assert_eq!(kw.search_volume, 1000);
        assert_eq!(kw.competition, 0.5);
        assert_eq!(kw.cpc, None);
        assert_eq!(kw.keyword_difficulty, None);
        assert_eq!(kw.search_intent, None);
        assert_eq!(kw.trend, None);
        assert!(kw.extra.is_empty());
    }

    #[test]
    fn test_keyword_record_with_optional_fields() {
        let kw = KeywordRecord::new("test keyword", 1000, 0.5)
            .and_then(|kw| kw.with_cpc(1.50).with_difficulty(45))
            .expect("valid record");
        assert_eq!(kw.cpc, Some(1.50));
        assert_eq!(kw.keyword_difficulty, Some(45));
        assert!((0.0..=1.0).contains(&kw.competition));
    }

    #[test]
    fn test_keyword_record_competition_bounds() {
        assert!(KeywordRecord::new("a", 0, 0.0).is_ok());
        assert!(KeywordRecord::new("a", 0, 1.0).is_ok());
        assert_eq!(
            KeywordRecord::new("a", 0, 1.01).unwrap_err(),
            ModelError::CompetitionOutOfRange(1.01)
        );
        assert!(KeywordRecord::new("a", 0, -0.1).is_err());
        assert!(KeywordRecord::new("a", 0, f64::NAN).is_err());
    }

    #[test]
    fn test_keyword_record_difficulty_bounds() {
        let kw = KeywordRecord::new("a", 0, 0.2).expect("valid record");
        assert!(kw.clone().with_difficulty(100).is_ok());
        assert_eq!(
            kw.with_difficulty(101).unwrap_err(),
            ModelError::DifficultyOutOfRange(101)
        );
    }

    #[test]
    fn test_keyword_record_trend_length() {
        let kw = KeywordRecord::new("a", 0, 0.2).expect("valid record");
        assert!(kw.clone().with_trend(vec![10; 12]).is_ok());
        assert_eq!(
            kw.with_trend(vec![10; 13]).unwrap_err(),
            ModelError::TrendTooLong { len: 13, max: 12 }
        );
    }

    #[test]
    fn test_keyword_record_extra_fields_flatten() {
        let mut kw = KeywordRecord::new("a", 10, 0.3).expect("valid record");
        kw.extra
            .insert("se_type".to_string(), Value::String("google".into()));
        let json = serde_json::to_value(&kw).expect("serializable");
        assert_eq!(json["se_type"], "google");
        assert_eq!(json["search_volume"], 10);

        let back: KeywordRecord = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, kw);
    }
}
