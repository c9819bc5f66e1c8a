//! Puzzle selection
//!
//! Decides which word the player is guessing: a custom word from a shared
//! link, a random pick from the full list, or the word of the day.

mod difficulty;
pub mod link;
mod selector;

pub use difficulty::{Difficulty, DifficultyError};
pub use link::{CustomPuzzle, DEFAULT_CREATOR, LinkError, LinkParams, create_puzzle_link};
pub use selector::{DailyIndex, MS_IN_DAY, PuzzleRequest, PuzzleSelector, daily_index};

use crate::core::Word;

/// Where a puzzle's solution came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    /// Word of the day; `tomorrow` is when the next one unlocks (epoch ms)
    Daily { index: usize, tomorrow: i64 },
    /// Word drawn by index from the full list
    Random { index: usize },
    /// Word from a shared link
    Custom { creator: String },
    /// No word list loaded, or the index is out of range
    Pending,
}

/// A resolved puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    solution: Word,
    source: PuzzleSource,
}

impl Puzzle {
    #[must_use]
    pub const fn new(solution: Word, source: PuzzleSource) -> Self {
        Self { solution, source }
    }

    /// A puzzle without a word; evaluation against it is neutral
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            solution: Word::from_letters(Vec::new()),
            source: PuzzleSource::Pending,
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn source(&self) -> &PuzzleSource {
        &self.source
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.solution.is_empty()
    }

    /// Position in the daily or full list
    #[must_use]
    pub const fn solution_index(&self) -> Option<usize> {
        match self.source {
            PuzzleSource::Daily { index, .. } | PuzzleSource::Random { index } => Some(index),
            PuzzleSource::Custom { .. } | PuzzleSource::Pending => None,
        }
    }

    #[must_use]
    pub fn solution_creator(&self) -> Option<&str> {
        match &self.source {
            PuzzleSource::Custom { creator } => Some(creator),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tomorrow(&self) -> Option<i64> {
        match self.source {
            PuzzleSource::Daily { tomorrow, .. } => Some(tomorrow),
            _ => None,
        }
    }
}
