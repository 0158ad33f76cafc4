mod types;

pub use types::ExtractionStats;

use std::time::Duration;

use crate::models::KeywordResult;

impl ExtractionStats {
    /// Word count is taken from the raw text, not the normalized tokens.
    /// Processing time is whatever duration the caller measured.
    pub fn compute(source_text: &str, keywords: &[KeywordResult], elapsed: Duration) -> Self {
        Self {
            word_count: word_count(source_text),
            keyword_count: keywords.len(),
            processing_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
