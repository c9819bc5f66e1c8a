//! Difficulty levels
//!
//! The difficulty is the word length in letter units and selects the guess budget.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Word length in letter units, between 3 and 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

/// Error for a difficulty outside 3..=9
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Difficulty must be between 3 and 9, got {0}")]
pub struct DifficultyError(String);

impl Difficulty {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 9;

    /// Every difficulty, shortest words first
    pub const ALL: [Self; 7] = [
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    #[must_use]
    pub const fn new(length: u8) -> Option<Self> {
        if length >= Self::MIN && length <= Self::MAX {
            Some(Self(length))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Number of letter units in a word of this difficulty
    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        self.0 as usize
    }

    /// Guess budget for this difficulty
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        match self.0 {
            3 => 7,
            4 | 5 => 8,
            6 => 10,
            7 => 12,
            8 => 14,
            _ => 18,
        }
    }

    /// Position of this difficulty in `ALL`
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| DifficultyError(value.to_string()))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| DifficultyError(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
