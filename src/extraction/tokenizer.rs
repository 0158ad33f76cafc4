use std::collections::HashMap;

use super::stopwords::is_stopword;

/// Tokens this short or shorter never become candidates.
const MAX_DISCARDED_LEN: usize = 2;

/// A distinct token with its occurrence count in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub token: String,
    pub frequency: usize,
}

/// Lowercase, strip everything but word characters and whitespace, split on
/// whitespace runs and drop short tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > MAX_DISCARDED_LEN)
        .map(str::to_string)
        .collect()
}

/// Count tokens, drop stopwords and rank by descending frequency.
///
/// Ties keep the order in which tokens were first seen. At most `limit`
/// candidates are returned.
pub fn select_candidates(text: &str, limit: usize) -> Vec<Candidate> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counted: Vec<Candidate> = Vec::new();

    for token in tokenize(text) {
        match positions.get(&token).copied() {
            Some(idx) => counted[idx].frequency += 1,
            None => {
                positions.insert(token.clone(), counted.len());
                counted.push(Candidate {
                    token,
                    frequency: 1,
                });
            }
        }
    }

    counted.retain(|candidate| !is_stopword(&candidate.token));
    // sort_by is stable, so equal frequencies stay in discovery order
    counted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counted.truncate(limit);
    counted
}
