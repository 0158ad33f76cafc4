use thiserror::Error;

/// Failures surfaced to the user. The display string is the message shown.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    #[error("Please enter some text to extract keywords.")]
    EmptyInput,
    #[error("Maximum keywords must be between {min} and {max} (got {got}).")]
    InvalidMaxKeywords { got: usize, min: usize, max: usize },
    #[error("No keywords to {0}. Extract keywords first.")]
    NoKeywords(&'static str),
    #[error("Failed to copy keywords to clipboard: {0}")]
    Clipboard(String),
    #[error("No history entry at position {0}.")]
    HistoryIndex(usize),
    #[error("An extraction is already in progress.")]
    Busy,
    #[error("Extraction was cancelled.")]
    Cancelled,
    #[error("Failed to export keywords: {0}")]
    Export(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ExtractorResult<T> = Result<T, ExtractorError>;
