//! Persistence of statistics and games in progress
//!
//! Everything lives as JSON files in one data directory:
//!
//! - `stats-<difficulty>.json`: `GameStats`
//! - `game-<difficulty>.json`: `GameState` of the last game
//! - `id`: the player id
//!
//! Writes go to a temporary file in the same directory that is then renamed
//! over the target, so a crash never leaves a half-written file.

use crate::core::Word;
use crate::game::Game;
use crate::puzzle::Difficulty;
use crate::stats::GameStats;
use rand::Rng;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const ID_LENGTH: usize = 10;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Error type for the store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Corrupt data in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Saved game, enough to restore the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub guesses: Vec<Word>,
    pub solution: Word,
    /// Day offset the game was started with
    pub day: i64,
    /// Index of a random game, `None` for daily and custom games
    pub random: Option<usize>,
    #[serde(default)]
    pub gave_up: bool,
}

impl GameState {
    #[must_use]
    pub fn from_game(game: &Game, day: i64, random: Option<usize>) -> Self {
        Self {
            guesses: game.guesses().to_vec(),
            solution: game.puzzle().solution().clone(),
            day,
            random,
            gave_up: game.gave_up(),
        }
    }

    /// Whether this state belongs to a game of `solution`
    #[must_use]
    pub fn matches(&self, solution: &Word) -> bool {
        !solution.is_empty() && &self.solution == solution
    }
}

/// Random player id: ten base-36 characters
#[must_use]
pub fn create_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect()
}

/// JSON file store rooted at a data directory
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn stats_path(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(format!("stats-{difficulty}.json"))
    }

    fn game_path(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(format!("game-{difficulty}.json"))
    }

    /// Statistics of `difficulty`, zeroed when none are saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load_stats(&self, difficulty: Difficulty) -> Result<GameStats, StoreError> {
        Ok(read_json(&self.stats_path(difficulty))?.unwrap_or_else(|| GameStats::new(difficulty)))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be written.
    pub fn save_stats(&self, difficulty: Difficulty, stats: &GameStats) -> Result<(), StoreError> {
        write_json(&self.dir, &self.stats_path(difficulty), stats)
    }

    /// Statistics of every difficulty
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on the first unreadable file.
    pub fn load_all_stats(&self) -> Result<Vec<(Difficulty, GameStats)>, StoreError> {
        Difficulty::ALL
            .iter()
            .map(|&difficulty| Ok((difficulty, self.load_stats(difficulty)?)))
            .collect()
    }

    /// Fold a finished game into the saved statistics
    ///
    /// Returns the new statistics, or `None` while the game is still running.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the statistics cannot be read or written.
    pub fn record_game(&self, game: &Game) -> Result<Option<GameStats>, StoreError> {
        let Some(guesses_used) = game.guesses_used_for_stats() else {
            return Ok(None);
        };
        let difficulty = game.difficulty();
        let stats = self
            .load_stats(difficulty)?
            .record_completed_game(guesses_used, difficulty);
        self.save_stats(difficulty, &stats)?;

        tracing::info!(
            %difficulty,
            guesses_used,
            total = stats.total_games,
            streak = stats.current_streak,
            "recorded completed game"
        );
        Ok(Some(stats))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load_game(&self, difficulty: Difficulty) -> Result<Option<GameState>, StoreError> {
        read_json(&self.game_path(difficulty))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be written.
    pub fn save_game(&self, difficulty: Difficulty, state: &GameState) -> Result<(), StoreError> {
        write_json(&self.dir, &self.game_path(difficulty), state)
    }

    /// The player id, created on first use
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the id file cannot be read or created.
    pub fn player_id(&self) -> Result<String, StoreError> {
        let path = self.dir.join("id");
        match fs::read_to_string(&path) {
            Ok(id) if !id.trim().is_empty() => return Ok(id.trim().to_string()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(StoreError::Io { path, source }),
        }

        let id = create_id();
        write_atomic(&self.dir, &path, id.as_bytes())?;
        tracing::debug!(%id, "created player id");
        Ok(id)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    tracing::debug!(path = %path.display(), "loaded");
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize>(dir: &Path, path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(dir, path, &content)
}

fn write_atomic(dir: &Path, path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_error)?;
    let temp_file = NamedTempFile::new_in(dir).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        writer.write_all(content).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
    }
    temp_file.persist(path).map_err(|e| io_error(e.error))?;

    tracing::debug!(path = %path.display(), "saved");
    Ok(())
}
