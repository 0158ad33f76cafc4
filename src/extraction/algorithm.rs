use serde::{Deserialize, Serialize};
use std::{fmt, ops::Range, str::FromStr};

/// Algorithm tag selected by the caller.
///
/// Tags only pick the range scores are drawn from. Anything that is not one of
/// the four known tags is kept as `Unrecognized` and scores zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Algorithm {
    Tfidf,
    Rake,
    Textrank,
    Yake,
    Unrecognized(String),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Tfidf
    }
}

impl Algorithm {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "tfidf" => Algorithm::Tfidf,
            "rake" => Algorithm::Rake,
            "textrank" => Algorithm::Textrank,
            "yake" => Algorithm::Yake,
            other => Algorithm::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Algorithm::Tfidf => "tfidf",
            Algorithm::Rake => "rake",
            Algorithm::Textrank => "textrank",
            Algorithm::Yake => "yake",
            Algorithm::Unrecognized(tag) => tag.as_str(),
        }
    }

    /// Half-open range the base score is drawn from, `None` for unrecognized tags.
    pub fn score_range(&self) -> Option<Range<f64>> {
        match self {
            Algorithm::Tfidf => Some(0.70..1.0),
            Algorithm::Rake => Some(0.60..1.0),
            Algorithm::Textrank => Some(0.80..1.0),
            Algorithm::Yake => Some(0.50..1.0),
            Algorithm::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Algorithm::Unrecognized(_))
    }
}

impl FromStr for Algorithm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Algorithm::parse(s))
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::parse(&value)
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
