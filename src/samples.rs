use rand::{seq::SliceRandom, Rng};

pub static SAMPLE_TEXTS: &[&str] = &[
    "Machine learning is a subset of artificial intelligence that focuses on building systems that learn from data. Instead of being explicitly programmed, these systems use algorithms to identify patterns and make decisions. Deep learning is a specialized form of machine learning that uses neural networks with many layers.",
    "Natural language processing (NLP) is a field of artificial intelligence that enables computers to understand, interpret, and manipulate human language. NLP combines computational linguistics with statistical, machine learning, and deep learning models.",
    "Climate change refers to long-term shifts in temperatures and weather patterns. These shifts may be natural, but since the 1800s, human activities have been the main driver of climate change, primarily due to the burning of fossil fuels.",
];

/// Pick one of the built-in sample texts.
pub fn random_sample<R: Rng>(rng: &mut R) -> &'static str {
    SAMPLE_TEXTS.choose(rng).copied().unwrap_or_default()
}
