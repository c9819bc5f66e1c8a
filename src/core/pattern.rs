//! Guess feedback calculation
//!
//! A pattern holds one `GuessStatus` per guessed letter. Evaluation follows the
//! usual Wordle rules on letter units, with duplicate letters credited to exact
//! matches first, and adds the multiplicity (`-diff`) marker.

use super::{GuessStatus, Word};
use serde::{Deserialize, Serialize};

/// Feedback pattern for a guess
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<GuessStatus>);

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// An empty `answer` (puzzle not loaded yet) yields an empty pattern.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those answer positions
    /// 2. Second pass: for the remaining guess letters, consume the leftmost
    ///    unconsumed occurrence in the answer, or mark the letter absent
    /// 3. A matched letter gets the `-diff` variant when the answer contains more
    ///    copies of it than the guess
    ///
    /// # Panics
    /// Panics if `answer` is non-empty and the lengths differ. Guesses are
    /// validated against the difficulty before evaluation.
    ///
    /// # Examples
    /// ```
    /// use szozat::core::{GuessStatus, Pattern, Word};
    ///
    /// let answer = Word::from_text("kalap");
    /// let guess = Word::from_text("kabát");
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // KALAP has two A's, KABÁT supplies only one
    /// assert_eq!(pattern.statuses()[1], GuessStatus::CorrectDiff);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        if answer.is_empty() {
            return Self::default();
        }
        assert_eq!(
            guess.len(),
            answer.len(),
            "guess and answer must have the same number of letters"
        );

        let answer_counts = answer.letter_counts();
        let guess_counts = guess.letter_counts();
        let is_diff = |letter| {
            answer_counts.get(&letter).copied().unwrap_or(0)
                > guess_counts.get(&letter).copied().unwrap_or(0)
        };

        let mut result: Vec<Option<GuessStatus>> = vec![None; guess.len()];
        let mut taken = vec![false; answer.len()];

        // First pass: exact position matches
        for (i, (&letter, &expected)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if letter == expected {
                result[i] = Some(GuessStatus::correct(is_diff(letter)));
                taken[i] = true;
            }
        }

        // Second pass: wrong position, consuming the leftmost free occurrence
        for (i, &letter) in guess.letters().iter().enumerate() {
            if result[i].is_some() {
                continue;
            }

            let status = if answer.contains(letter) {
                let free = answer
                    .letters()
                    .iter()
                    .zip(&taken)
                    .position(|(&candidate, &used)| candidate == letter && !used);

                if let Some(position) = free {
                    taken[position] = true;
                    GuessStatus::present(is_diff(letter))
                } else {
                    GuessStatus::Absent
                }
            } else {
                GuessStatus::Absent
            };
            result[i] = Some(status);
        }

        Self(
            result
                .into_iter()
                .map(|status| status.unwrap_or(GuessStatus::Absent))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[GuessStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (every letter correct)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == GuessStatus::Correct)
    }

    /// Count the number of correct letters (either variant)
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|s| s.is_correct()).count()
    }

    /// Count the number of present letters (either variant)
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|s| s.is_present()).count()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use szozat::core::{Pattern, Word};
    ///
    /// let answer = Word::from_text("alma");
    /// let pattern = Pattern::calculate(&Word::from_text("arab"), &answer);
    /// assert_eq!(pattern.to_emoji(), "🟩⬜🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl From<Vec<GuessStatus>> for Pattern {
    fn from(statuses: Vec<GuessStatus>) -> Self {
        Self(statuses)
    }
}
