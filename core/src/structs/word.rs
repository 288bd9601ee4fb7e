use core::fmt;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordError {
    #[error("Expected word of length {expected_length}. Found word \"{word}\" of length {}", word.chars().count())]
    IncorrectLength {
        word: String,
        expected_length: usize,
    },
    #[error("Word \"{word}\" contains characters outside a-z")]
    NotAlphabetic { word: String },
}

/// A word of exactly N lowercase ASCII letters.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordN<const N: usize>(#[serde_as(as = "[_; N]")] pub [char; N]);

impl<const N: usize> fmt::Display for WordN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<const N: usize> WordN<N> {
    pub fn init(init_value: char) -> Self {
        Self([init_value; N])
    }
}

impl<const N: usize> TryFrom<&str> for WordN<N> {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NotAlphabetic {
                word: value.to_string(),
            });
        }

        let array = value
            .to_ascii_lowercase()
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_: Vec<_>| WordError::IncorrectLength {
                word: value.to_string(),
                expected_length: N,
            })?;

        Ok(Self(array))
    }
}
