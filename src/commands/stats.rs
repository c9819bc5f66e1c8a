//! Statistics report

use crate::puzzle::Difficulty;
use crate::stats::{DifficultyTotals, GameStats, GlobalStats};
use crate::storage::{Store, StoreError};

/// Saved statistics of every difficulty, with their sum
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub per_difficulty: Vec<(Difficulty, GameStats)>,
    pub overall: DifficultyTotals,
}

impl StatsReport {
    /// Difficulties with at least one finished game
    pub fn played(&self) -> impl Iterator<Item = &(Difficulty, GameStats)> {
        self.per_difficulty
            .iter()
            .filter(|(_, stats)| stats.total_games > 0)
    }
}

/// Read the statistics of every difficulty from `store`
///
/// # Errors
///
/// Returns `StoreError` if a statistics file cannot be read.
pub fn collect_stats(store: &Store) -> Result<StatsReport, StoreError> {
    let per_difficulty = store.load_all_stats()?;
    let overall = per_difficulty
        .iter()
        .map(|(difficulty, stats)| (*difficulty, stats))
        .collect::<GlobalStats>()
        .overall();

    Ok(StatsReport {
        per_difficulty,
        overall,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_reports_nothing_played() {
        let dir = tempfile::tempdir().unwrap();
        let report = collect_stats(&Store::new(dir.path())).unwrap();

        assert_eq!(report.per_difficulty.len(), Difficulty::ALL.len());
        assert_eq!(report.played().count(), 0);
        assert_eq!(report.overall.total_count, 0);
    }

    #[test]
    fn overall_sums_difficulties() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let five = Difficulty::default();
        let seven = Difficulty::new(7).unwrap();
        store
            .save_stats(five, &GameStats::new(five).record_completed_game(1, five))
            .unwrap();
        store
            .save_stats(
                seven,
                &GameStats::new(seven)
                    .record_completed_game(1, seven)
                    .record_completed_game(12, seven),
            )
            .unwrap();

        let report = collect_stats(&store).unwrap();
        assert_eq!(report.played().count(), 2);
        assert_eq!(report.overall.total_count, 3);
        assert_eq!(report.overall.failed_count, 1);
        assert_eq!(report.overall.distributions[1], 2);
        assert_eq!(report.overall.distributions.len(), seven.max_guesses());
    }
}
