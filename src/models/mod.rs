//! Domain models for SEO data.
//!
//! Records are plain value objects built once from a parsed response and owned
//! by the caller. Optional vendor data is `Option`, so a record built from
//! required fields alone is always complete.

mod backlink;
mod citation;
mod keyword;
mod ranking;
mod request;

pub use backlink::BacklinkRecord;
pub use citation::CitationRecord;
pub use keyword::KeywordRecord;
pub use ranking::RankingRecord;
pub use request::{KeywordResearchRequest, SerpTrackingRequest};
