use std::cmp::Ordering;

use rand::Rng;

use crate::extraction::{algorithm::Algorithm, config::ExtractionConfig, tokenizer::Candidate};
use crate::models::KeywordResult;

/// Draw a base score for one candidate. Unrecognized tags always score zero.
pub fn draw_base_score<R: Rng>(algorithm: &Algorithm, rng: &mut R) -> f64 {
    match algorithm.score_range() {
        Some(range) => rng.gen_range(range),
        None => 0.0,
    }
}

/// Score ranked candidates and keep the best `max_keywords`.
///
/// Every candidate at a position divisible by three that has a successor is
/// fused with that successor into a two-token phrase carrying a bonus. The
/// successor still gets its own entry.
pub fn score_candidates<R: Rng>(
    candidates: &[Candidate],
    algorithm: &Algorithm,
    max_keywords: usize,
    config: &ExtractionConfig,
    rng: &mut R,
) -> Vec<KeywordResult> {
    let mut scored: Vec<KeywordResult> = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let base = draw_base_score(algorithm, rng);
            match candidates.get(idx + 1) {
                Some(next) if idx % 3 == 0 => KeywordResult::new(
                    format!("{} {}", candidate.token, next.token),
                    (base + config.phrase_bonus).min(config.phrase_score_cap),
                ),
                _ => KeywordResult::new(candidate.token.clone(), base),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(max_keywords);
    scored
}
