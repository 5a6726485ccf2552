// Correction candidate type

use serde::{Deserialize, Serialize};

/// Score given to a word accepted without fuzzy matching.
pub const FULL_CONFIDENCE: f64 = 100.0;

/// A proposed correction and its confidence score in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub score: f64,
}

impl Candidate {
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    /// A candidate accepted by exact lookup.
    pub fn exact(word: impl Into<String>) -> Self {
        Self::new(word, FULL_CONFIDENCE)
    }
}
