use std::{ops::RangeInclusive, time::Duration};

/// Tunables for the extraction pipeline and the simulated latency.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Fixed delay before an accepted request is processed
    pub simulated_delay: Duration,

    /// Keyword counts the host accepts. The pipeline itself works for any
    /// count; the controller rejects requests outside this range before
    /// they start, so a host that allows fewer keywords widens it here
    /// (e.g. `1..=20`).
    pub max_keywords_range: RangeInclusive<usize>,

    /// Candidates kept before scoring, as a multiple of the requested count.
    /// The headroom leaves room for phrase synthesis.
    pub candidate_multiplier: usize,

    /// Bonus added to a fused two-token phrase, and its ceiling
    pub phrase_bonus: f64,
    pub phrase_score_cap: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            simulated_delay: Duration::from_millis(1500),
            max_keywords_range: 3..=20,
            candidate_multiplier: 2,
            phrase_bonus: 0.10,
            phrase_score_cap: 0.95,
        }
    }
}

impl ExtractionConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }

    pub fn candidate_limit(&self, max_keywords: usize) -> usize {
        max_keywords.saturating_mul(self.candidate_multiplier)
    }
}
