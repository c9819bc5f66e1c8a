//! Puzzle word representation
//!
//! A Word is a sequence of letter units. Its length is counted in letter units,
//! so "SZÉKEK" has five letters (SZ, É, K, E, K).

use super::letter::{Letter, fold};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Split raw text into letter units
///
/// The input is folded first (uppercase, composed diacritics). The scan then
/// takes the longest unit matching at each position; characters outside the
/// alphabet are dropped, so callers must check the resulting length.
///
/// # Examples
/// ```
/// use szozat::core::tokenize;
///
/// let units: Vec<&str> = tokenize("Dzsungel").into_iter().map(|l| l.as_str()).collect();
/// assert_eq!(units, ["DZS", "U", "N", "G", "E", "L"]);
/// ```
#[must_use]
pub fn tokenize(raw: &str) -> Vec<Letter> {
    let folded = fold(raw);
    let mut letters = Vec::with_capacity(folded.len());
    let mut rest = folded.as_str();

    while let Some(ch) = rest.chars().next() {
        if let Some(letter) = Letter::match_prefix(rest) {
            letters.push(letter);
            rest = &rest[letter.as_str().len()..];
        } else {
            rest = &rest[ch.len_utf8()..];
        }
    }

    letters
}

/// A word made of letter units
///
/// The empty word stands for a puzzle whose word list has not been loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word {
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Unknown letter unit: {0}")]
    UnknownLetter(String),
}

impl Word {
    /// Tokenize `raw` into a word of any length
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        Self {
            letters: tokenize(raw),
        }
    }

    /// Tokenize `raw` and require exactly `length` letter units
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the tokenized word has a different
    /// number of letter units.
    ///
    /// # Examples
    /// ```
    /// use szozat::core::Word;
    ///
    /// let word = Word::parse("szegény", 5).unwrap();
    /// assert_eq!(word.text(), "SZEGÉNY");
    ///
    /// assert!(Word::parse("szegény", 7).is_err());
    /// ```
    pub fn parse(raw: &str, length: usize) -> Result<Self, WordError> {
        let word = Self::from_text(raw);
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Build a word from already tokenized letter units such as `["K", "A", "L", "A", "P"]`
    ///
    /// # Errors
    /// Returns `WordError::UnknownLetter` for a unit outside the alphabet.
    pub fn from_units<S: AsRef<str>>(units: &[S]) -> Result<Self, WordError> {
        units
            .iter()
            .map(|unit| {
                let unit = unit.as_ref();
                Letter::from_unit(&fold(unit)).ok_or_else(|| WordError::UnknownLetter(unit.into()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_letters)
    }

    #[must_use]
    pub const fn from_letters(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letter units
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter unit in the word
    ///
    /// Used by guess evaluation to detect multiplicity differences.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<Letter, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }

    /// The word joined back into uppercase text
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.as_str()).collect()
    }

    /// The letter units as strings, the shape word lists are exchanged in
    #[must_use]
    pub fn units(&self) -> Vec<&'static str> {
        self.letters.iter().map(|l| l.as_str()).collect()
    }
}

impl FromIterator<Letter> for Word {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self::from_letters(iter.into_iter().collect())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            f.write_str(letter.as_str())?;
        }
        Ok(())
    }
}
