use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::models::KeywordResult;

/// Strings wrapped around every highlighted match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightMarker {
    pub open: String,
    pub close: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self {
            open: "<mark>".into(),
            close: "</mark>".into(),
        }
    }
}

/// One case-insensitive, ASCII-word-bounded pattern matching any keyword literally.
///
/// Longer keywords come first so a phrase wins over its leading token.
fn keyword_pattern(keywords: &[KeywordResult]) -> Result<Option<Regex>, regex::Error> {
    let mut literals: Vec<&str> = keywords
        .iter()
        .map(|k| k.keyword.as_str())
        .filter(|k| !k.is_empty())
        .collect();
    if literals.is_empty() {
        return Ok(None);
    }
    literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    literals.dedup();

    let alternation = literals
        .iter()
        .map(|literal| regex::escape(literal))
        .collect::<Vec<_>>()
        .join("|");

    // ASCII word boundaries, so "caf" still matches inside "café"
    RegexBuilder::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)"))
        .case_insensitive(true)
        .build()
        .map(Some)
}

/// Wrap every whole-word occurrence of any keyword in `text` with the marker.
pub fn highlight(
    text: &str,
    keywords: &[KeywordResult],
    marker: &HighlightMarker,
) -> Result<String, regex::Error> {
    let Some(pattern) = keyword_pattern(keywords)? else {
        return Ok(text.to_string());
    };

    let highlighted = pattern.replace_all(text, |caps: &regex::Captures| {
        format!("{}{}{}", marker.open, &caps[0], marker.close)
    });
    Ok(highlighted.into_owned())
}
