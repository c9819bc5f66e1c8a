//! Game session
//!
//! Tracks the guesses of one puzzle, validates new guesses and decides when
//! the game is won or lost.

use crate::core::{Keyboard, Pattern, Word};
use crate::puzzle::{Difficulty, Puzzle};
use crate::wordlists::WordLists;
use rand::seq::IndexedRandom;

/// Messages shown after a win, one picked at random
pub const WIN_MESSAGES: [&str; 4] = ["Szép munka!", "Fantasztikus!", "Nagyszerű!", "Zseniális!"];

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("A játéknak vége")]
    GameOver,
    #[error("A feladvány még nem töltődött be")]
    NotReady,
    #[error("{}", length_message(*expected, *actual))]
    NotEnoughLetters { expected: usize, actual: usize },
    #[error("Nem találtunk ilyen szót: {0}")]
    NotInWordList(String),
}

fn length_message(expected: usize, actual: usize) -> String {
    if actual < expected {
        format!("Nincs elég betű ({actual}/{expected})")
    } else {
        format!("Túl sok betű ({actual}/{expected})")
    }
}

/// One puzzle being played
#[derive(Debug, Clone)]
pub struct Game {
    difficulty: Difficulty,
    puzzle: Puzzle,
    guesses: Vec<Word>,
    patterns: Vec<Pattern>,
    keyboard: Keyboard,
    outcome: Outcome,
    gave_up: bool,
}

impl Game {
    #[must_use]
    pub fn new(difficulty: Difficulty, puzzle: Puzzle) -> Self {
        Self {
            difficulty,
            puzzle,
            guesses: Vec::new(),
            patterns: Vec::new(),
            keyboard: Keyboard::new(),
            outcome: Outcome::InProgress,
            gave_up: false,
        }
    }

    /// Rebuild a game from guesses accepted earlier
    ///
    /// The guesses are not checked against the word list again. Guesses of
    /// the wrong length and anything after the game ended are dropped.
    #[must_use]
    pub fn replay(difficulty: Difficulty, puzzle: Puzzle, guesses: &[Word], gave_up: bool) -> Self {
        let mut game = Self::new(difficulty, puzzle);
        for guess in guesses {
            if game.is_over() || guess.len() != difficulty.word_length() {
                continue;
            }
            game.apply(guess.clone());
        }
        if gave_up {
            game.give_up();
        }
        game
    }

    /// Submit a guess
    ///
    /// The solution itself is always accepted, even when it is missing from
    /// the word list (custom puzzles).
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the game is over, the puzzle is not loaded, the
    /// guess has the wrong number of letters or is not a known word.
    ///
    /// # Examples
    /// ```
    /// use szozat::core::Word;
    /// use szozat::game::{Game, Outcome};
    /// use szozat::puzzle::{Difficulty, Puzzle, PuzzleSource};
    /// use szozat::wordlists::WordLists;
    ///
    /// let lists = WordLists::embedded();
    /// let puzzle = Puzzle::new(Word::from_text("kalap"), PuzzleSource::Random { index: 0 });
    /// let mut game = Game::new(Difficulty::default(), puzzle);
    ///
    /// let pattern = game.submit("kalap", &lists).unwrap();
    /// assert!(pattern.is_perfect());
    /// assert_eq!(game.outcome(), Outcome::Won);
    /// ```
    pub fn submit(&mut self, raw: &str, lists: &WordLists) -> Result<Pattern, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        if !self.puzzle.is_ready() {
            return Err(GuessError::NotReady);
        }

        let guess = Word::from_text(raw);
        let expected = self.difficulty.word_length();
        if guess.len() != expected {
            return Err(GuessError::NotEnoughLetters {
                expected,
                actual: guess.len(),
            });
        }
        if &guess != self.puzzle.solution() && !lists.is_valid_guess(self.difficulty, &guess) {
            return Err(GuessError::NotInWordList(guess.text()));
        }

        Ok(self.apply(guess))
    }

    fn apply(&mut self, guess: Word) -> Pattern {
        let pattern = Pattern::calculate(&guess, self.puzzle.solution());
        self.keyboard.record(&guess, &pattern);

        let won = &guess == self.puzzle.solution();
        self.guesses.push(guess);
        self.patterns.push(pattern.clone());

        if won {
            self.outcome = Outcome::Won;
        } else if self.guesses.len() >= self.max_guesses() {
            self.outcome = Outcome::Lost;
        }
        pattern
    }

    /// End the game as lost
    ///
    /// Returns `false` if there was nothing to give up.
    pub fn give_up(&mut self) -> bool {
        if self.is_over() || !self.puzzle.is_ready() {
            return false;
        }
        self.outcome = Outcome::Lost;
        self.gave_up = true;
        true
    }

    /// Value recorded in the statistics once the game is over
    ///
    /// Guesses made before the winning one, or `max_guesses` for a loss.
    #[must_use]
    pub fn guesses_used_for_stats(&self) -> Option<usize> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won => Some(self.guesses.len() - 1),
            Outcome::Lost => Some(self.max_guesses()),
        }
    }

    /// Message shown when the game ends, `None` while it is running
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won => WIN_MESSAGES
                .choose(&mut rand::rng())
                .map(|message| (*message).to_string()),
            Outcome::Lost => Some(format!(
                "Vesztettél, a megoldás ez volt: {}",
                self.puzzle.solution()
            )),
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn gave_up(&self) -> bool {
        self.gave_up
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.difficulty.max_guesses()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses().saturating_sub(self.guesses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleSource;

    fn three() -> Difficulty {
        Difficulty::new(3).unwrap()
    }

    fn lists() -> WordLists {
        let words = ["ház", "kéz", "fül", "kör", "tér", "fej", "kés", "víz", "tűz"]
            .iter()
            .map(|w| Word::from_text(w))
            .collect();
        WordLists::empty().with_all(three(), words)
    }

    fn game(solution: &str) -> Game {
        Game::new(
            three(),
            Puzzle::new(Word::from_text(solution), PuzzleSource::Random { index: 0 }),
        )
    }

    #[test]
    fn win_on_second_guess() {
        let lists = lists();
        let mut game = game("ház");

        let first = game.submit("kéz", &lists).unwrap();
        assert!(!first.is_perfect());
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.guesses_used_for_stats(), None);

        assert!(game.submit("HÁZ", &lists).unwrap().is_perfect());
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.guesses_used_for_stats(), Some(1));
        assert_eq!(game.submit("kéz", &lists), Err(GuessError::GameOver));
    }

    #[test]
    fn lose_after_max_guesses() {
        let lists = lists();
        let mut game = game("tűz");
        for guess in ["ház", "kéz", "fül", "kör", "tér", "fej", "kés"] {
            game.submit(guess, &lists).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.remaining_guesses(), 0);
        assert_eq!(game.guesses_used_for_stats(), Some(7));
        assert!(!game.gave_up());
    }

    #[test]
    fn winning_on_last_guess_is_a_win() {
        let lists = lists();
        let mut game = game("tűz");
        for guess in ["ház", "kéz", "fül", "kör", "tér", "fej", "tűz"] {
            game.submit(guess, &lists).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.guesses_used_for_stats(), Some(6));
    }

    #[test]
    fn rejects_wrong_length() {
        let lists = lists();
        let mut game = game("ház");
        assert_eq!(
            game.submit("ha", &lists),
            Err(GuessError::NotEnoughLetters {
                expected: 3,
                actual: 2
            })
        );
        assert!(game.submit("kalap", &lists).is_err());
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn length_counts_letter_units() {
        // "gyík" is three letters
        let lists = WordLists::empty().with_all(three(), vec![Word::from_text("gyík")]);
        let mut game = game("ház");
        assert!(game.submit("gyík", &lists).is_ok());
    }

    #[test]
    fn rejects_unknown_word() {
        let lists = lists();
        let mut game = game("ház");
        assert_eq!(
            game.submit("xyz", &lists),
            Err(GuessError::NotInWordList("XYZ".to_string()))
        );
    }

    #[test]
    fn solution_accepted_outside_word_list() {
        let lists = lists();
        let mut game = game("méz");
        assert!(game.submit("méz", &lists).unwrap().is_perfect());
    }

    #[test]
    fn pending_puzzle_rejects_guesses() {
        let lists = lists();
        let mut game = Game::new(three(), Puzzle::pending());
        assert_eq!(game.submit("ház", &lists), Err(GuessError::NotReady));
        assert!(!game.give_up());
    }

    #[test]
    fn give_up_counts_as_loss() {
        let lists = lists();
        let mut game = game("ház");
        game.submit("kéz", &lists).unwrap();

        assert!(game.give_up());
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.guesses_used_for_stats(), Some(7));
        assert!(!game.give_up());
    }

    #[test]
    fn keyboard_tracks_guesses() {
        let lists = lists();
        let mut game = game("ház");
        game.submit("kéz", &lists).unwrap();

        let z = crate::core::Letter::from_unit("Z").unwrap();
        assert_eq!(game.keyboard().status(z), Some(crate::core::GuessStatus::Correct));
        assert_eq!(game.patterns().len(), 1);
    }

    #[test]
    fn replay_restores_outcome() {
        let puzzle = Puzzle::new(Word::from_text("ház"), PuzzleSource::Random { index: 0 });
        let guesses = [Word::from_text("kéz"), Word::from_text("ház"), Word::from_text("fül")];

        let game = Game::replay(three(), puzzle.clone(), &guesses, false);
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.guesses().len(), 2);

        let gave_up = Game::replay(three(), puzzle, &guesses[..1], true);
        assert_eq!(gave_up.outcome(), Outcome::Lost);
        assert!(gave_up.gave_up());
    }

    #[test]
    fn end_messages() {
        let lists = lists();
        let mut won = game("ház");
        assert_eq!(won.end_message(), None);
        won.submit("ház", &lists).unwrap();
        assert!(WIN_MESSAGES.contains(&won.end_message().unwrap().as_str()));

        let mut lost = game("ház");
        lost.give_up();
        assert_eq!(
            lost.end_message().unwrap(),
            "Vesztettél, a megoldás ez volt: HÁZ"
        );
    }

    #[test]
    fn error_messages() {
        let short = GuessError::NotEnoughLetters {
            expected: 5,
            actual: 3,
        };
        assert_eq!(short.to_string(), "Nincs elég betű (3/5)");
        let long = GuessError::NotEnoughLetters {
            expected: 5,
            actual: 6,
        };
        assert_eq!(long.to_string(), "Túl sok betű (6/5)");
    }
}
