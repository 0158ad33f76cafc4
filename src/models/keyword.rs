use serde::{Deserialize, Serialize};

/// A scored keyword: one token, or two tokens joined by a single space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    pub keyword: String,
    pub score: f64,
}

impl KeywordResult {
    pub fn new(keyword: impl Into<String>, score: f64) -> Self {
        Self {
            keyword: keyword.into(),
            score,
        }
    }

    pub fn is_phrase(&self) -> bool {
        self.keyword.contains(' ')
    }
}
