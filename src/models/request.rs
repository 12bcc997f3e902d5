//! Request models.
//!
//! Validated inputs for the keyword research and batch SERP tracking operations.

use crate::config::{
    Locale, DEFAULT_SERP_DEPTH, MAX_KEYWORDS_PER_REQUEST, MIN_KEYWORDS_PER_REQUEST,
};
use crate::error_handling::ModelError;

/// Request for keyword research (1 to 100 keywords).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordResearchRequest {
    keywords: Vec<String>,
    pub locale: Locale,
}

impl KeywordResearchRequest {
    /// # Errors
    ///
    /// Returns `ModelError::KeywordCount` if the list is empty or holds more than 100 keywords.
    pub fn new(keywords: Vec<String>, locale: Locale) -> Result<Self, ModelError> {
        let count = keywords.len();
        if !(MIN_KEYWORDS_PER_REQUEST..=MAX_KEYWORDS_PER_REQUEST).contains(&count) {
            return Err(ModelError::KeywordCount {
                count,
                min: MIN_KEYWORDS_PER_REQUEST,
                max: MAX_KEYWORDS_PER_REQUEST,
            });
        }
        Ok(Self { keywords, locale })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Request to track SERP rankings of one domain across keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpTrackingRequest {
    pub keywords: Vec<String>,
    /// Matched as a substring of each result's domain
    pub target_domain: String,
    pub locale: Locale,
    /// How deep to search in the SERP
    pub depth: u32,
}

impl SerpTrackingRequest {
    pub fn new(keywords: Vec<String>, target_domain: impl Into<String>) -> Self {
        Self {
            keywords,
            target_domain: target_domain.into(),
            locale: Locale::default(),
            depth: DEFAULT_SERP_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("keyword {i}")).collect()
    }

    #[test]
    fn test_keyword_research_request_bounds() {
        assert!(KeywordResearchRequest::new(keywords(1), Locale::default()).is_ok());
        assert!(KeywordResearchRequest::new(keywords(100), Locale::default()).is_ok());
        assert_eq!(
            KeywordResearchRequest::new(keywords(0), Locale::default()).unwrap_err(),
            ModelError::KeywordCount {
                count: 0,
                min: 1,
                max: 100
            }
        );
        assert!(KeywordResearchRequest::new(keywords(101), Locale::default()).is_err());
    }

    #[test]
    fn test_serp_tracking_request_defaults() {
        let request = SerpTrackingRequest::new(keywords(2), "example.substack.com");
        assert_eq!(request.depth, 100);
        assert_eq!(request.locale, Locale::default());
        assert_eq!(request.target_domain, "example.substack.com");
    }
}
