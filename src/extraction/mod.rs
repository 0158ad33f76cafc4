pub mod algorithm;
pub mod config;
pub mod scoring;
pub mod stopwords;
pub mod tokenizer;

pub use algorithm::Algorithm;
pub use config::ExtractionConfig;
pub use tokenizer::{select_candidates, Candidate};

use rand::Rng;

use crate::models::KeywordResult;

/// Full pipeline: frequency-ranked candidates, then simulated scoring.
pub fn extract_keywords<R: Rng>(
    text: &str,
    algorithm: &Algorithm,
    max_keywords: usize,
    config: &ExtractionConfig,
    rng: &mut R,
) -> Vec<KeywordResult> {
    // Step 1: rank candidates, leaving headroom for phrase synthesis
    let candidates = select_candidates(text, config.candidate_limit(max_keywords));

    // Step 2: score, fuse phrases and keep the top entries
    scoring::score_candidates(&candidates, algorithm, max_keywords, config, rng)
}
