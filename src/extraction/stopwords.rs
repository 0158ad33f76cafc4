use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English function words excluded from candidacy.
pub static STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can", "this", "that", "these",
    "those", "it", "its", "they", "them", "their", "from", "as", "not", "which", "what", "who",
    "when", "where", "how", "than", "then", "also", "into", "such",
];

fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Expects an already lowercased token.
pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token)
}
