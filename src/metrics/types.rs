use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionStats {
    pub word_count: usize,
    pub keyword_count: usize,
    pub processing_time_ms: u64,
}
