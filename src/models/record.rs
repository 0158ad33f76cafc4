use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::Algorithm;

use super::KeywordResult;

const PREVIEW_CHARS: usize = 50;

/// One committed extraction, as kept in the history log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    pub id: String,
    pub source_text: String,
    pub keywords: Vec<KeywordResult>,
    pub algorithm: Algorithm,
    pub timestamp: DateTime<Utc>,
}

impl ExtractionRecord {
    pub fn new(
        source_text: String,
        keywords: Vec<KeywordResult>,
        algorithm: Algorithm,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source_text,
            keywords,
            algorithm,
            timestamp,
        }
    }

    /// Short label for history lists: the first 50 characters, with an
    /// ellipsis when the text was cut.
    pub fn preview(&self) -> String {
        let mut chars = self.source_text.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

/// The keyword set currently displayed and acted on by highlight, copy and export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSelection {
    pub source_text: String,
    pub keywords: Vec<KeywordResult>,
}

impl From<&ExtractionRecord> for CurrentSelection {
    fn from(record: &ExtractionRecord) -> Self {
        Self {
            source_text: record.source_text.clone(),
            keywords: record.keywords.clone(),
        }
    }
}
