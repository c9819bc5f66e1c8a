//! Hungarian letter units
//!
//! The puzzle alphabet mixes single characters with the digraphs and the
//! trigraph of Hungarian spelling ("CS", "SZ", "DZS", ...). Each of them is one
//! letter for guessing purposes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Every letter unit, in tokenization priority order.
///
/// The trigraph comes first, then the digraphs, so a greedy scan that takes the
/// first entry matching at the current position always takes the longest unit.
const ALPHABET: [&str; 44] = [
    // Trigraph
    "DZS",
    // Digraphs
    "CS", "DZ", "GY", "LY", "NY", "SZ", "TY", "ZS",
    // Vowels
    "A", "Á", "E", "É", "I", "Í", "O", "Ó", "Ö", "Ő", "U", "Ú", "Ü", "Ű",
    // Single consonants
    "B", "C", "D", "F", "G", "H", "J", "K", "L", "M", "N", "P", "Q", "R", "S", "T", "V", "W", "X",
    "Y", "Z",
];

const FIRST_VOWEL: u8 = 9;
const FIRST_SINGLE_CONSONANT: u8 = 23;

/// Broad class of a letter unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterKind {
    Vowel,
    Consonant,
    /// Digraph or trigraph consonant
    MultiConsonant,
}

/// One letter of the puzzle alphabet
///
/// Stored as an index into the fixed alphabet, so it is `Copy` and hashes as a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Number of letter units in the alphabet
    pub const COUNT: usize = ALPHABET.len();

    /// Iterate over the alphabet in tokenization priority order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET.len() as u8).map(Self)
    }

    /// Look up a letter unit by its (already folded) text
    ///
    /// # Examples
    /// ```
    /// use szozat::core::Letter;
    ///
    /// assert_eq!(Letter::from_unit("DZS").map(Letter::as_str), Some("DZS"));
    /// assert!(Letter::from_unit("dzs").is_none());
    /// assert!(Letter::from_unit("Ä").is_none());
    /// ```
    #[must_use]
    pub fn from_unit(unit: &str) -> Option<Self> {
        ALPHABET
            .iter()
            .position(|&candidate| candidate == unit)
            .map(|index| Self(index as u8))
    }

    /// Longest letter unit at the start of `folded`, if any
    pub(crate) fn match_prefix(folded: &str) -> Option<Self> {
        Self::all().find(|letter| folded.starts_with(letter.as_str()))
    }

    /// The canonical uppercase text of this letter
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        ALPHABET[self.0 as usize]
    }

    #[must_use]
    pub const fn kind(self) -> LetterKind {
        if self.0 < FIRST_VOWEL {
            LetterKind::MultiConsonant
        } else if self.0 < FIRST_SINGLE_CONSONANT {
            LetterKind::Vowel
        } else {
            LetterKind::Consonant
        }
    }

    /// Letters that only appear in loanwords when standing alone (Q, W, X, Y)
    #[must_use]
    pub fn is_foreign(self) -> bool {
        matches!(self.as_str(), "Q" | "W" | "X" | "Y")
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let unit = String::deserialize(deserializer)?;
        Self::from_unit(&fold(&unit))
            .ok_or_else(|| serde::de::Error::custom(format!("unknown letter unit: {unit}")))
    }
}

/// Uppercase `raw` and fold diacritic variants onto the alphabet
///
/// - decomposed vowels (base letter + combining acute, diaeresis or double
///   acute) are composed into the precomposed letter
/// - the code-page look-alikes Õ/Ô and Û/Ũ become Ő and Ű
#[must_use]
pub fn fold(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());

    for ch in raw.chars().flat_map(char::to_uppercase) {
        match ch {
            '\u{301}' | '\u{308}' | '\u{30B}' => {
                // A stray mark without a composable base is dropped
                if let Some(base) = folded.pop() {
                    folded.push(compose(base, ch).unwrap_or(base));
                }
            }
            'Õ' | 'Ô' => folded.push('Ő'),
            'Û' | 'Ũ' => folded.push('Ű'),
            _ => folded.push(ch),
        }
    }

    folded
}

const fn compose(base: char, mark: char) -> Option<char> {
    let composed = match (base, mark) {
        ('A', '\u{301}') => 'Á',
        ('E', '\u{301}') => 'É',
        ('I', '\u{301}') => 'Í',
        ('O', '\u{301}') => 'Ó',
        ('U', '\u{301}') => 'Ú',
        ('O', '\u{308}') => 'Ö',
        ('U', '\u{308}') => 'Ü',
        ('O', '\u{30B}') => 'Ő',
        ('U', '\u{30B}') => 'Ű',
        _ => return None,
    };
    Some(composed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_no_duplicates() {
        for letter in Letter::all() {
            assert_eq!(Letter::from_unit(letter.as_str()), Some(letter));
        }
        assert_eq!(Letter::all().count(), Letter::COUNT);
    }

    #[test]
    fn longer_units_come_before_their_prefixes() {
        // Any unit that is a prefix of another must be listed after it
        let units: Vec<&str> = Letter::all().map(Letter::as_str).collect();
        for (i, unit) in units.iter().enumerate() {
            for longer in &units[i + 1..] {
                assert!(!longer.starts_with(unit), "{longer} is shadowed by {unit}");
            }
        }
    }

    #[test]
    fn letter_kinds() {
        assert_eq!(Letter::from_unit("DZS").unwrap().kind(), LetterKind::MultiConsonant);
        assert_eq!(Letter::from_unit("SZ").unwrap().kind(), LetterKind::MultiConsonant);
        assert_eq!(Letter::from_unit("Ő").unwrap().kind(), LetterKind::Vowel);
        assert_eq!(Letter::from_unit("A").unwrap().kind(), LetterKind::Vowel);
        assert_eq!(Letter::from_unit("B").unwrap().kind(), LetterKind::Consonant);
        assert_eq!(Letter::from_unit("Z").unwrap().kind(), LetterKind::Consonant);
    }

    #[test]
    fn foreign_letters() {
        let foreign: Vec<&str> = Letter::all()
            .filter(|l| l.is_foreign())
            .map(Letter::as_str)
            .collect();
        assert_eq!(foreign, ["Q", "W", "X", "Y"]);
    }

    #[test]
    fn match_prefix_prefers_longest_unit() {
        assert_eq!(Letter::match_prefix("DZSEM").unwrap().as_str(), "DZS");
        assert_eq!(Letter::match_prefix("DZA").unwrap().as_str(), "DZ");
        assert_eq!(Letter::match_prefix("DA").unwrap().as_str(), "D");
        assert!(Letter::match_prefix("-").is_none());
        assert!(Letter::match_prefix("").is_none());
    }

    #[test]
    fn fold_uppercases() {
        assert_eq!(fold("kalap"), "KALAP");
        assert_eq!(fold("tűzőgép"), "TŰZŐGÉP");
    }

    #[test]
    fn fold_composes_combining_marks() {
        assert_eq!(fold("ha\u{301}z"), "HÁZ");
        assert_eq!(fold("o\u{30B}sz"), "ŐSZ");
        assert_eq!(fold("u\u{308}t"), "ÜT");
    }

    #[test]
    fn fold_maps_look_alikes() {
        assert_eq!(fold("õsz"), "ŐSZ");
        assert_eq!(fold("tûz"), "TŰZ");
        assert_eq!(fold("Ô"), "Ő");
    }

    #[test]
    fn fold_drops_orphan_marks() {
        assert_eq!(fold("\u{301}ab"), "AB");
        assert_eq!(fold("b\u{301}"), "B");
    }

    #[test]
    fn letter_serde_as_string() {
        let letter = Letter::from_unit("GY").unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"GY\"");
        assert_eq!(serde_json::from_str::<Letter>("\"gy\"").unwrap(), letter);
        assert!(serde_json::from_str::<Letter>("\"GYX\"").is_err());
    }
}
