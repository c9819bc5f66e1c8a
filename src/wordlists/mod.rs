//! Word lists per difficulty
//!
//! Each difficulty has a curated list of daily puzzles and a larger list of
//! every accepted word. Random games draw from the larger list, which also
//! decides whether a guess is a real word.

mod embedded;
pub mod loader;

pub use embedded::{ALL, PUZZLES};
pub use loader::WordListError;

use crate::core::Word;
use crate::puzzle::Difficulty;
use loader::words_from_slice;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
struct Lists {
    puzzles: Vec<Word>,
    all: Vec<Word>,
    valid: FxHashSet<Word>,
}

impl Lists {
    fn new(puzzles: Vec<Word>, all: Vec<Word>) -> Self {
        let valid = puzzles.iter().chain(&all).cloned().collect();
        Self {
            puzzles,
            all,
            valid,
        }
    }
}

/// Puzzle and guess lists for every difficulty
#[derive(Debug, Clone)]
pub struct WordLists {
    lists: [Lists; 7],
}

impl WordLists {
    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            lists: Difficulty::ALL.map(|difficulty| {
                let index = difficulty.index();
                Lists::new(
                    words_from_slice(PUZZLES[index], difficulty),
                    words_from_slice(ALL[index], difficulty),
                )
            }),
        }
    }

    /// No words at all, every puzzle stays pending
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lists: Default::default(),
        }
    }

    /// Replace the daily list of `difficulty`
    ///
    /// The new words are accepted as guesses too.
    #[must_use]
    pub fn with_puzzles(mut self, difficulty: Difficulty, puzzles: Vec<Word>) -> Self {
        let slot = &mut self.lists[difficulty.index()];
        let all = std::mem::take(&mut slot.all);
        *slot = Lists::new(puzzles, all);
        self
    }

    /// Replace the list of accepted words of `difficulty`
    #[must_use]
    pub fn with_all(mut self, difficulty: Difficulty, all: Vec<Word>) -> Self {
        let slot = &mut self.lists[difficulty.index()];
        let puzzles = std::mem::take(&mut slot.puzzles);
        *slot = Lists::new(puzzles, all);
        self
    }

    /// Curated daily puzzles
    #[must_use]
    pub fn puzzles(&self, difficulty: Difficulty) -> &[Word] {
        &self.lists[difficulty.index()].puzzles
    }

    /// Every accepted word, in stable order for random indices
    #[must_use]
    pub fn all(&self, difficulty: Difficulty) -> &[Word] {
        &self.lists[difficulty.index()].all
    }

    #[must_use]
    pub fn is_valid_guess(&self, difficulty: Difficulty, word: &Word) -> bool {
        self.lists[difficulty.index()].valid.contains(word)
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::embedded()
    }
}
