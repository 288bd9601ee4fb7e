use serde::{Deserialize, Serialize};
use serde_with::serde_as;

pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Index of a lowercase ASCII letter into the frequency tables.
pub fn letter_index(c: char) -> usize {
    debug_assert!(c.is_ascii_lowercase());
    (c as u8 - b'a') as usize
}

/// Occurrence counts per letter, over all words and all positions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts(pub [u64; 26]);

impl LetterCounts {
    pub fn zero() -> Self {
        Self([0; 26])
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn get(&self, c: char) -> u64 {
        self.0[letter_index(c)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ALPHABET.iter().copied().zip(self.0.iter().copied())
    }

    /// Counts divided by the table total; all zeros when the table is empty.
    pub fn normalized(&self) -> LetterFrequencies {
        let total = self.total() as f64;
        let mut frequencies = [0.; 26];

        if total > 0. {
            for (frequency, &count) in frequencies.iter_mut().zip(self.0.iter()) {
                *frequency = count as f64 / total;
            }
        }

        LetterFrequencies(frequencies)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LetterFrequencies(pub [f64; 26]);

impl LetterFrequencies {
    pub fn get(&self, c: char) -> f64 {
        self.0[letter_index(c)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        ALPHABET.iter().copied().zip(self.0.iter().copied())
    }
}

/// Occurrence counts per (position, letter) pair.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PositionalCounts<const N: usize>(#[serde_as(as = "[_; N]")] pub [[u64; 26]; N]);

impl<const N: usize> PositionalCounts<N> {
    pub fn zero() -> Self {
        Self([[0; 26]; N])
    }

    pub fn position_total(&self, position: usize) -> u64 {
        self.0[position].iter().sum()
    }

    pub fn get(&self, position: usize, c: char) -> u64 {
        self.0[position][letter_index(c)]
    }

    /// Counts divided by the total of their position; all zeros when empty.
    pub fn normalized(&self) -> PositionalFrequencies<N> {
        let mut frequencies = [[0.; 26]; N];

        for (row, counts) in frequencies.iter_mut().zip(self.0.iter()) {
            let total: u64 = counts.iter().sum();
            if total > 0 {
                for (frequency, &count) in row.iter_mut().zip(counts.iter()) {
                    *frequency = count as f64 / total as f64;
                }
            }
        }

        PositionalFrequencies(frequencies)
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PositionalFrequencies<const N: usize>(#[serde_as(as = "[_; N]")] pub [[f64; 26]; N]);

impl<const N: usize> PositionalFrequencies<N> {
    pub fn get(&self, position: usize, c: char) -> f64 {
        self.0[position][letter_index(c)]
    }
}

/// Both frequency tables of one corpus, built in a single pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrequencyAnalysis<const N: usize> {
    pub letters: LetterCounts,
    pub positions: PositionalCounts<N>,
}

/// Population mean and standard deviation of the 26 per-letter counts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LetterStats {
    pub mean: f64,
    pub std_dev: f64,
}
