//! Game statistics
//!
//! Per-difficulty statistics kept for the player, and the totals summed over
//! many players for the global histogram.

use crate::puzzle::Difficulty;
use serde::{Deserialize, Serialize};

/// Statistics of one player at one difficulty
///
/// `win_distribution[i]` counts games won with `i` earlier guesses, that is
/// won on guess `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub win_distribution: Vec<u32>,
    pub games_failed: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_games: u32,
    pub success_rate: u32,
}

impl GameStats {
    /// Empty statistics for `difficulty`
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            win_distribution: vec![0; difficulty.max_guesses()],
            games_failed: 0,
            current_streak: 0,
            best_streak: 0,
            total_games: 0,
            success_rate: 0,
        }
    }

    /// Statistics after one more completed game
    ///
    /// `guesses_used` is the number of guesses made before the winning one.
    /// Any value of at least `max_guesses` records a failure.
    ///
    /// # Examples
    /// ```
    /// use szozat::puzzle::Difficulty;
    /// use szozat::stats::GameStats;
    ///
    /// let difficulty = Difficulty::default();
    /// let stats = GameStats::new(difficulty)
    ///     .record_completed_game(2, difficulty)
    ///     .record_completed_game(8, difficulty);
    ///
    /// assert_eq!(stats.win_distribution[2], 1);
    /// assert_eq!(stats.games_failed, 1);
    /// assert_eq!(stats.success_rate, 50);
    /// ```
    #[must_use]
    pub fn record_completed_game(&self, guesses_used: usize, difficulty: Difficulty) -> Self {
        let max_guesses = difficulty.max_guesses();
        let mut stats = self.clone();
        if stats.win_distribution.len() < max_guesses {
            stats.win_distribution.resize(max_guesses, 0);
        }

        stats.total_games += 1;

        if guesses_used > max_guesses - 1 {
            stats.current_streak = 0;
            stats.games_failed += 1;
        } else {
            stats.win_distribution[guesses_used] += 1;
            stats.current_streak += 1;
            stats.best_streak = stats.best_streak.max(stats.current_streak);
        }

        stats.success_rate = success_rate(stats.total_games, stats.games_failed);
        stats
    }

    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.total_games.saturating_sub(self.games_failed)
    }
}

/// Percentage of games won, rounded half up
#[must_use]
pub fn success_rate(total_games: u32, games_failed: u32) -> u32 {
    let total = u64::from(total_games.max(1));
    let won = u64::from(total_games.saturating_sub(games_failed));
    // round(100 * won / total) without floating point
    let rate = (200 * won + total) / (2 * total);
    u32::try_from(rate).unwrap_or(100)
}

/// Totals of one difficulty, in the shape the stats endpoint exchanges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyTotals {
    pub total_count: u64,
    pub failed_count: u64,
    pub distributions: Vec<u64>,
}

impl DifficultyTotals {
    /// Add another set of totals, element-wise for the distribution
    pub fn merge(&mut self, other: &Self) {
        self.total_count += other.total_count;
        self.failed_count += other.failed_count;
        if self.distributions.len() < other.distributions.len() {
            self.distributions.resize(other.distributions.len(), 0);
        }
        for (sum, &count) in self.distributions.iter_mut().zip(&other.distributions) {
            *sum += count;
        }
    }

    #[must_use]
    pub fn success_rate(&self) -> u32 {
        let clamp = |n: u64| u32::try_from(n).unwrap_or(u32::MAX);
        success_rate(clamp(self.total_count), clamp(self.failed_count))
    }
}

impl From<&GameStats> for DifficultyTotals {
    fn from(stats: &GameStats) -> Self {
        Self {
            total_count: u64::from(stats.total_games),
            failed_count: u64::from(stats.games_failed),
            distributions: stats.win_distribution.iter().copied().map(u64::from).collect(),
        }
    }
}

/// Totals for every difficulty, summed over any number of players
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalStats {
    totals: [DifficultyTotals; 7],
}

impl GlobalStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one player's statistics at `difficulty`
    pub fn merge(&mut self, difficulty: Difficulty, totals: &DifficultyTotals) {
        self.totals[difficulty.index()].merge(totals);
    }

    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &DifficultyTotals {
        &self.totals[difficulty.index()]
    }

    /// Sum of every difficulty
    #[must_use]
    pub fn overall(&self) -> DifficultyTotals {
        let mut overall = DifficultyTotals::default();
        for totals in &self.totals {
            overall.merge(totals);
        }
        overall
    }
}

impl<'a> FromIterator<(Difficulty, &'a GameStats)> for GlobalStats {
    fn from_iter<I: IntoIterator<Item = (Difficulty, &'a GameStats)>>(iter: I) -> Self {
        let mut global = Self::new();
        for (difficulty, stats) in iter {
            global.merge(difficulty, &stats.into());
        }
        global
    }
}
