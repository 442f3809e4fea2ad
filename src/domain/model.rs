use serde::{Deserialize, Serialize};
use std::fmt;

/// A word in an autocomplete index together with its weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub word: String,
    pub weight: u64,
}

impl Term {
    pub fn new(word: impl Into<String>, weight: u64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }

    /// A zero-weight term, handy as a lookup key.
    pub fn query(word: impl Into<String>) -> Self {
        Self::new(word, 0)
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.weight, self.word)
    }
}
