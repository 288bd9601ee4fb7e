pub mod freq;
pub mod word;

use serde::{Deserialize, Serialize};

pub use freq::{
    letter_index, FrequencyAnalysis, LetterCounts, LetterFrequencies, LetterStats,
    PositionalCounts, PositionalFrequencies, ALPHABET,
};
pub use word::{WordError, WordN};

/// A named word list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Corpus<const N: usize> {
    pub name: String,
    pub words: Vec<WordN<N>>,
}

impl<const N: usize> Corpus<N> {
    pub fn new(name: String, words: Vec<WordN<N>>) -> Self {
        Self { name, words }
    }
}
