//! Cumulative keyboard status
//!
//! Folds the patterns of every guess into the best status seen per letter.

use super::{GuessStatus, Letter, Pattern, Word};
use rustc_hash::FxHashMap;

/// Best status observed for each letter over the guesses of a game
///
/// Updates are monotonic by `GuessStatus::rank`: a letter shown correct is
/// never shown present or absent again, and a present letter never turns
/// absent. Within a rank the latest observation wins, so the `-diff` marker
/// reflects the most recent guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    statuses: FxHashMap<Letter, GuessStatus>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate every guess against `answer` and fold the results
    ///
    /// An empty `answer` produces an empty keyboard.
    ///
    /// # Examples
    /// ```
    /// use szozat::core::{GuessStatus, Keyboard, Letter, Word};
    ///
    /// let answer = Word::from_text("kalap");
    /// let guesses = [Word::from_text("kabát"), Word::from_text("ablak")];
    /// let keyboard = Keyboard::from_guesses(&guesses, &answer);
    ///
    /// let k = Letter::from_unit("K").unwrap();
    /// assert_eq!(keyboard.status(k), Some(GuessStatus::Correct));
    /// ```
    #[must_use]
    pub fn from_guesses(guesses: &[Word], answer: &Word) -> Self {
        let mut keyboard = Self::new();
        for guess in guesses {
            keyboard.record(guess, &Pattern::calculate(guess, answer));
        }
        keyboard
    }

    /// Fold one evaluated guess into the keyboard
    pub fn record(&mut self, guess: &Word, pattern: &Pattern) {
        for (&letter, &status) in guess.letters().iter().zip(pattern.statuses()) {
            self.statuses
                .entry(letter)
                .and_modify(|previous| {
                    if status.supersedes(*previous) {
                        *previous = status;
                    }
                })
                .or_insert(status);
        }
    }

    #[must_use]
    pub fn status(&self, letter: Letter) -> Option<GuessStatus> {
        self.statuses.get(&letter).copied()
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Known statuses in alphabet order
    #[must_use]
    pub fn entries(&self) -> Vec<(Letter, GuessStatus)> {
        let mut entries: Vec<_> = self.statuses.iter().map(|(&l, &s)| (l, s)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GuessStatus::{Absent, Correct, CorrectDiff, Present, PresentDiff};

    fn letter(unit: &str) -> Letter {
        Letter::from_unit(unit).unwrap()
    }

    fn words(raw: &[&str]) -> Vec<Word> {
        raw.iter().map(|w| Word::from_text(w)).collect()
    }

    #[test]
    fn keyboard_single_guess() {
        let keyboard = Keyboard::from_guesses(&words(&["kabát"]), &Word::from_text("kalap"));

        assert_eq!(keyboard.status(letter("K")), Some(Correct));
        assert_eq!(keyboard.status(letter("A")), Some(CorrectDiff));
        assert_eq!(keyboard.status(letter("B")), Some(Absent));
        assert_eq!(keyboard.status(letter("Á")), Some(Absent));
        assert_eq!(keyboard.status(letter("T")), Some(Absent));
        assert_eq!(keyboard.status(letter("P")), None);
        assert_eq!(keyboard.len(), 5);
    }

    #[test]
    fn keyboard_never_downgrades_correct() {
        // K correct in the first guess, then placed wrongly
        let answer = Word::from_text("kalap");
        let keyboard = Keyboard::from_guesses(&words(&["kabát", "ablak"]), &answer);

        assert_eq!(keyboard.status(letter("K")), Some(Correct));
    }

    #[test]
    fn keyboard_never_downgrades_present() {
        // L present in the first guess; the second guess repeats L beyond the
        // answer's single copy, so one of them evaluates absent
        let answer = Word::from_text("alma");
        let keyboard = Keyboard::from_guesses(&words(&["kapu", "lila"]), &answer);

        assert_eq!(keyboard.status(letter("L")), Some(Present));
        assert_eq!(keyboard.status(letter("A")), Some(CorrectDiff));
    }

    #[test]
    fn keyboard_diff_marker_follows_latest_guess() {
        let answer = Word::from_text("alma");
        let first = Keyboard::from_guesses(&words(&["kapu"]), &answer);
        assert_eq!(first.status(letter("A")), Some(PresentDiff));

        // "baba" supplies both A's
        let second = Keyboard::from_guesses(&words(&["kapu", "baba"]), &answer);
        assert_eq!(second.status(letter("A")), Some(Correct));
    }

    #[test]
    fn keyboard_is_monotonic_over_any_order() {
        let answer = Word::from_text("kalap");
        let guesses = words(&["lapát", "kabát", "ablak", "aaaaa", "kalap"]);

        let mut keyboard = Keyboard::new();
        let mut previous: Vec<(Letter, GuessStatus)> = Vec::new();
        for guess in &guesses {
            keyboard.record(guess, &Pattern::calculate(guess, &answer));
            for &(l, old) in &previous {
                let new = keyboard.status(l).unwrap();
                assert!(new.rank() >= old.rank(), "{l} went from {old} to {new}");
            }
            previous = keyboard.entries();
        }
    }

    #[test]
    fn keyboard_empty_answer() {
        let keyboard = Keyboard::from_guesses(&words(&["kalap"]), &Word::default());
        assert!(keyboard.is_empty());
    }

    #[test]
    fn keyboard_entries_sorted() {
        let keyboard = Keyboard::from_guesses(&words(&["dzsem"]), &Word::from_text("dzsem"));
        let entries = keyboard.entries();
        let units: Vec<&str> = entries.iter().map(|(l, _)| l.as_str()).collect();
        // Alphabet order puts the trigraph first, vowels before consonants
        assert_eq!(units, ["DZS", "E", "M"]);
    }
}
