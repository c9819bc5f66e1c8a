//! A playing session shared by the TUI and the line-based mode
//!
//! Resolves the puzzle, resumes a saved game and writes progress back to the
//! store after every move.

use crate::config::{Config, now_ms};
use crate::core::Pattern;
use crate::game::{Game, GuessError, Outcome};
use crate::puzzle::{CustomPuzzle, Difficulty, Puzzle, PuzzleRequest, PuzzleSelector};
use crate::share::{ShareRequest, share_text};
use crate::stats::GameStats;
use crate::storage::{GameState, Store, StoreError};
use crate::wordlists::WordLists;
use rand::Rng;

/// One player at one difficulty
pub struct Session {
    config: Config,
    lists: WordLists,
    store: Store,
    request: PuzzleRequest,
    game: Game,
    recorded: bool,
}

impl Session {
    /// Start the custom puzzle if one is given, otherwise resume the saved
    /// game or start today's puzzle
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the saved game cannot be read.
    pub fn open(
        config: Config,
        lists: WordLists,
        custom: Option<CustomPuzzle>,
    ) -> Result<Self, StoreError> {
        let store = config.store();
        let difficulty = config.difficulty;
        let saved = store.load_game(difficulty)?;

        let mut request = PuzzleRequest::daily(difficulty, 0).with_custom(custom);
        if request.custom.is_none()
            && let Some(state) = &saved
        {
            request.day = state.day;
            request.random = state.random;
        }

        let mut session = Self {
            game: Game::new(difficulty, Puzzle::pending()),
            config,
            lists,
            store,
            request,
            recorded: false,
        };
        session.start(saved.as_ref());
        Ok(session)
    }

    fn start(&mut self, saved: Option<&GameState>) {
        let selector = PuzzleSelector::new(&self.lists, self.config.epoch_ms());
        let puzzle = selector.resolve(&self.request, now_ms());

        self.game = match saved.filter(|state| state.matches(puzzle.solution())) {
            Some(state) => {
                tracing::debug!(guesses = state.guesses.len(), "resuming saved game");
                Game::replay(self.difficulty(), puzzle, &state.guesses, state.gave_up)
            }
            None => Game::new(self.difficulty(), puzzle),
        };
        // A finished game loaded from disk is already in the statistics
        self.recorded = self.game.is_over();
    }

    /// Start a random puzzle from the full list
    pub fn new_random_game(&mut self) {
        let len = self.lists.all(self.difficulty()).len();
        self.request = PuzzleRequest {
            random: (len > 0).then(|| rand::rng().random_range(0..len)),
            ..PuzzleRequest::daily(self.difficulty(), 0)
        };
        self.start(None);
    }

    /// Move to the daily puzzle `offset` days from the current one
    pub fn shift_day(&mut self, offset: i64) {
        let day = if self.request.random.is_some() {
            offset
        } else {
            self.request.day + offset
        };
        self.request = PuzzleRequest::daily(self.difficulty(), day);
        self.start(None);
    }

    /// Submit a guess
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the guess is rejected.
    pub fn submit(&mut self, raw: &str) -> Result<Pattern, GuessError> {
        self.game.submit(raw, &self.lists)
    }

    pub fn give_up(&mut self) -> bool {
        self.game.give_up()
    }

    /// Save the board, and the statistics once the game is over
    ///
    /// Returns the new statistics when this call recorded the finished game.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be written.
    pub fn persist(&mut self) -> Result<Option<GameStats>, StoreError> {
        if !self.game.puzzle().is_ready() {
            return Ok(None);
        }

        let state = GameState::from_game(&self.game, self.request.day, self.request.random);
        self.store.save_game(self.difficulty(), &state)?;

        if self.recorded {
            return Ok(None);
        }
        let stats = self.store.record_game(&self.game)?;
        self.recorded = stats.is_some();
        Ok(stats)
    }

    /// Share text of the current game
    #[must_use]
    pub fn share_text(&self) -> String {
        let lost = self.game.outcome() == Outcome::Lost;
        share_text(&ShareRequest {
            guesses: self.game.guesses(),
            puzzle: self.game.puzzle(),
            difficulty: self.difficulty(),
            lost,
            reveal_solution: lost,
            epoch: self.config.epoch,
            origin: &self.config.origin,
        })
    }

    /// Saved statistics of this difficulty
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the statistics cannot be read.
    pub fn stats(&self) -> Result<GameStats, StoreError> {
        self.store.load_stats(self.difficulty())
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Day offset of the current daily puzzle
    #[must_use]
    pub const fn day(&self) -> i64 {
        self.request.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::puzzle::PuzzleSource;

    fn config(dir: &std::path::Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn custom_puzzle_session() {
        let dir = tempfile::tempdir().unwrap();
        let custom = CustomPuzzle::new("kalap", Some("Anna".to_string()));
        let mut session =
            Session::open(config(dir.path()), WordLists::embedded(), Some(custom)).unwrap();

        assert_eq!(session.game().puzzle().solution_creator(), Some("Anna"));
        assert!(session.submit("kalap").unwrap().is_perfect());

        let stats = session.persist().unwrap().unwrap();
        assert_eq!(stats.win_distribution[0], 1);
        // Recorded once only
        assert_eq!(session.persist().unwrap(), None);
        assert!(session.share_text().starts_with("Szózat - Egyéni feladvány: Anna - 1/8\n"));
    }

    #[test]
    fn saved_game_is_resumed() {
        let dir = tempfile::tempdir().unwrap();
        let custom = || Some(CustomPuzzle::new("kalap", None));

        let mut first = Session::open(config(dir.path()), WordLists::embedded(), custom()).unwrap();
        first.submit("labda").unwrap();
        first.persist().unwrap();

        let second = Session::open(config(dir.path()), WordLists::embedded(), custom()).unwrap();
        assert_eq!(second.game().guesses(), [Word::from_text("labda")]);
        assert_eq!(second.game().outcome(), Outcome::InProgress);
    }

    #[test]
    fn other_day_game_is_resumed() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = Session::open(config(dir.path()), WordLists::embedded(), None).unwrap();
        first.shift_day(1);
        let solution = first.game().puzzle().solution().clone();
        let guess = ["kalap", "labda"]
            .into_iter()
            .map(Word::from_text)
            .find(|word| *word != solution)
            .unwrap();
        first.submit(&guess.text()).unwrap();
        first.persist().unwrap();

        let second = Session::open(config(dir.path()), WordLists::embedded(), None).unwrap();
        assert_eq!(second.day(), 1);
        assert_eq!(second.game().puzzle().solution(), &solution);
        assert_eq!(second.game().guesses(), [guess]);
    }

    #[test]
    fn finished_game_is_not_recorded_twice() {
        let dir = tempfile::tempdir().unwrap();
        let custom = || Some(CustomPuzzle::new("kalap", None));

        let mut first = Session::open(config(dir.path()), WordLists::embedded(), custom()).unwrap();
        first.give_up();
        assert_eq!(first.persist().unwrap().unwrap().games_failed, 1);

        let mut second = Session::open(config(dir.path()), WordLists::embedded(), custom()).unwrap();
        assert_eq!(second.game().outcome(), Outcome::Lost);
        assert_eq!(second.persist().unwrap(), None);
        assert_eq!(second.stats().unwrap().total_games, 1);
    }

    #[test]
    fn random_and_daily_switching() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(config(dir.path()), WordLists::embedded(), None).unwrap();
        assert!(matches!(session.game().puzzle().source(), PuzzleSource::Daily { .. }));

        session.new_random_game();
        assert!(matches!(session.game().puzzle().source(), PuzzleSource::Random { .. }));

        session.shift_day(1);
        assert_eq!(session.day(), 1);
        assert!(session.game().puzzle().tomorrow().is_some());
    }

    #[test]
    fn pending_puzzle_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(config(dir.path()), WordLists::empty(), None).unwrap();
        assert!(!session.game().puzzle().is_ready());
        assert_eq!(session.persist().unwrap(), None);
        assert!(!dir.path().join("game-5.json").exists());
    }
}
