//! Daily, random and custom word selection
//!
//! Selection is a pure function of the request, the word lists, the epoch and
//! the current time. No clock is read here.

use super::link::CustomPuzzle;
use super::{Difficulty, Puzzle, PuzzleSource};
use crate::core::Word;
use crate::wordlists::WordLists;

/// Milliseconds in a day
pub const MS_IN_DAY: i64 = 86_400_000;

/// Result of daily indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyIndex {
    /// Days elapsed since the epoch
    pub day_number: i64,
    /// Position in the curated list
    pub index: usize,
    /// Start of the next day (epoch ms)
    pub tomorrow: i64,
}

/// Index of the daily word
///
/// `day` offsets the current time by whole days. The day number wraps around
/// the list, and times before the epoch wrap the same way.
///
/// Returns `None` for an empty list, or when the offset moves the time out of
/// the `i64` millisecond range.
///
/// # Examples
/// ```
/// use szozat::puzzle::{MS_IN_DAY, daily_index};
///
/// let epoch = 1_640_995_200_000;
/// let today = daily_index(0, epoch + 10 * MS_IN_DAY + 5, epoch, 7).unwrap();
/// assert_eq!(today.day_number, 10);
/// assert_eq!(today.index, 3);
/// assert_eq!(today.tomorrow, epoch + 11 * MS_IN_DAY);
/// ```
#[must_use]
pub fn daily_index(day: i64, now_ms: i64, epoch_ms: i64, list_len: usize) -> Option<DailyIndex> {
    let len = i64::try_from(list_len).ok().filter(|&len| len > 0)?;
    let now = day.checked_mul(MS_IN_DAY)?.checked_add(now_ms)?;
    let day_number = now.checked_sub(epoch_ms)?.div_euclid(MS_IN_DAY);
    let index = usize::try_from(day_number.rem_euclid(len)).ok()?;
    let tomorrow = (day_number + 1)
        .checked_mul(MS_IN_DAY)?
        .checked_add(epoch_ms)?;

    Some(DailyIndex {
        day_number,
        index,
        tomorrow,
    })
}

/// What the player asked to play
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleRequest {
    pub difficulty: Difficulty,
    /// Offset from today in days
    pub day: i64,
    /// Index into the full list for a random game
    pub random: Option<usize>,
    /// Word from a shared link
    pub custom: Option<CustomPuzzle>,
}

impl PuzzleRequest {
    #[must_use]
    pub fn daily(difficulty: Difficulty, day: i64) -> Self {
        Self {
            difficulty,
            day,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn random(difficulty: Difficulty, index: usize) -> Self {
        Self {
            difficulty,
            random: Some(index),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_custom(mut self, custom: Option<CustomPuzzle>) -> Self {
        self.custom = custom;
        self
    }
}

/// Picks the solution for a request
#[derive(Debug, Clone, Copy)]
pub struct PuzzleSelector<'a> {
    lists: &'a WordLists,
    epoch_ms: i64,
}

impl<'a> PuzzleSelector<'a> {
    #[must_use]
    pub const fn new(lists: &'a WordLists, epoch_ms: i64) -> Self {
        Self { lists, epoch_ms }
    }

    #[must_use]
    pub const fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Resolve a request: custom link first, then random index, then daily
    ///
    /// A custom word of the wrong length is ignored and selection falls
    /// through to the other sources.
    #[must_use]
    pub fn resolve(&self, request: &PuzzleRequest, now_ms: i64) -> Puzzle {
        let custom = request
            .custom
            .as_ref()
            .and_then(|custom| Self::custom_word(custom, request.difficulty));

        let puzzle = custom.unwrap_or_else(|| match request.random {
            Some(index) => self.word_of_index(index, request.difficulty),
            None => self.word_of_day(request.day, request.difficulty, now_ms),
        });

        tracing::debug!(
            difficulty = %request.difficulty,
            source = ?puzzle.source(),
            "resolved puzzle"
        );
        puzzle
    }

    /// Word of the day, `day` days from now
    #[must_use]
    pub fn word_of_day(&self, day: i64, difficulty: Difficulty, now_ms: i64) -> Puzzle {
        let words = self.lists.puzzles(difficulty);
        match daily_index(day, now_ms, self.epoch_ms, words.len()) {
            Some(DailyIndex {
                index, tomorrow, ..
            }) => Puzzle::new(
                words[index].clone(),
                PuzzleSource::Daily { index, tomorrow },
            ),
            None => Puzzle::pending(),
        }
    }

    /// Word at `index` of the full list
    #[must_use]
    pub fn word_of_index(&self, index: usize, difficulty: Difficulty) -> Puzzle {
        self.lists.all(difficulty).get(index).map_or_else(
            || {
                tracing::debug!(index, %difficulty, "random index out of range");
                Puzzle::pending()
            },
            |word| Puzzle::new(word.clone(), PuzzleSource::Random { index }),
        )
    }

    /// Tokenize a custom word, rejecting it unless it matches the difficulty
    #[must_use]
    pub fn custom_word(custom: &CustomPuzzle, difficulty: Difficulty) -> Option<Puzzle> {
        match Word::parse(&custom.solution, difficulty.word_length()) {
            Ok(solution) => Some(Puzzle::new(
                solution,
                PuzzleSource::Custom {
                    creator: custom.creator.clone(),
                },
            )),
            Err(e) => {
                tracing::debug!(%difficulty, error = %e, "ignoring custom puzzle");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::DEFAULT_CREATOR;

    // 2022-01-01 00:00 UTC
    const EPOCH: i64 = 1_640_995_200_000;

    fn five() -> Difficulty {
        Difficulty::default()
    }

    fn lists() -> WordLists {
        WordLists::empty()
            .with_puzzles(
                five(),
                ["kalap", "labda", "madár"].iter().map(|w| Word::from_text(w)).collect(),
            )
            .with_all(
                five(),
                ["kenyér", "fogas"].iter().map(|w| Word::from_text(w)).collect(),
            )
    }

    #[test]
    fn daily_index_is_stable_within_a_day() {
        let start = EPOCH + 40 * MS_IN_DAY;
        let first = daily_index(0, start, EPOCH, 30).unwrap();
        let last = daily_index(0, start + MS_IN_DAY - 1, EPOCH, 30).unwrap();
        assert_eq!(first, last);
        assert_eq!(first.index, 10);

        let next = daily_index(0, start + MS_IN_DAY, EPOCH, 30).unwrap();
        assert_eq!(next.index, 11);
        assert_eq!(next.tomorrow, first.tomorrow + MS_IN_DAY);
    }

    #[test]
    fn daily_index_day_offset() {
        let now = EPOCH + 5 * MS_IN_DAY + 1000;
        assert_eq!(
            daily_index(2, now, EPOCH, 100),
            daily_index(0, now + 2 * MS_IN_DAY, EPOCH, 100)
        );
        assert_eq!(daily_index(-5, now, EPOCH, 100).unwrap().index, 0);
    }

    #[test]
    fn daily_index_before_epoch_wraps() {
        let index = daily_index(0, EPOCH - 1, EPOCH, 7).unwrap();
        assert_eq!(index.day_number, -1);
        assert_eq!(index.index, 6);
        assert_eq!(index.tomorrow, EPOCH);
    }

    #[test]
    fn daily_index_empty_list() {
        assert_eq!(daily_index(0, EPOCH, EPOCH, 0), None);
    }

    #[test]
    fn daily_index_out_of_range_offset() {
        let now = 1_700_000_000_000;
        assert_eq!(daily_index(200_000_000_000, now, EPOCH, 30), None);
        assert_eq!(daily_index(-200_000_000_000, now, EPOCH, 30), None);
        assert_eq!(daily_index(i64::MAX, now, EPOCH, 30), None);
        assert!(daily_index(100_000_000, now, EPOCH, 30).is_some());
    }

    #[test]
    fn resolve_daily_out_of_range_is_pending() {
        let lists = lists();
        let selector = PuzzleSelector::new(&lists, EPOCH);
        let puzzle = selector.word_of_day(i64::MIN, five(), EPOCH);
        assert!(!puzzle.is_ready());
    }

    #[test]
    fn resolve_daily() {
        let lists = lists();
        let selector = PuzzleSelector::new(&lists, EPOCH);
        let puzzle = selector.resolve(&PuzzleRequest::daily(five(), 0), EPOCH + 4 * MS_IN_DAY);

        assert_eq!(puzzle.solution(), &Word::from_text("labda"));
        assert_eq!(puzzle.solution_index(), Some(1));
        assert_eq!(puzzle.tomorrow(), Some(EPOCH + 5 * MS_IN_DAY));
    }

    #[test]
    fn resolve_random() {
        let lists = lists();
        let selector = PuzzleSelector::new(&lists, EPOCH);
        let puzzle = selector.resolve(&PuzzleRequest::random(five(), 1), EPOCH);

        assert_eq!(puzzle.solution(), &Word::from_text("fogas"));
        assert_eq!(puzzle.source(), &PuzzleSource::Random { index: 1 });
        assert_eq!(puzzle.tomorrow(), None);
    }

    #[test]
    fn resolve_random_out_of_range_is_pending() {
        let lists = lists();
        let selector = PuzzleSelector::new(&lists, EPOCH);
        let puzzle = selector.resolve(&PuzzleRequest::random(five(), 2), EPOCH);
        assert!(!puzzle.is_ready());
    }

    #[test]
    fn resolve_empty_list_is_pending() {
        let lists = WordLists::empty();
        let selector = PuzzleSelector::new(&lists, EPOCH);
        let puzzle = selector.resolve(&PuzzleRequest::daily(five(), 0), EPOCH);
        assert_eq!(puzzle, Puzzle::pending());
    }

    #[test]
    fn resolve_custom_overrides_daily_and_random() {
        let lists = lists();
        let selector = PuzzleSelector::new(&lists, EPOCH);
        let custom = CustomPuzzle::new("szegény", None);

        for request in [
            PuzzleRequest::daily(five(), 0),
            PuzzleRequest::random(five(), 0),
        ] {
            let puzzle = selector.resolve(&request.with_custom(Some(custom.clone())), EPOCH);
            assert_eq!(puzzle.solution().text(), "SZEGÉNY");
            assert_eq!(puzzle.solution_creator(), Some(DEFAULT_CREATOR));
            assert_eq!(puzzle.solution_index(), None);
            assert_eq!(puzzle.tomorrow(), None);
        }
    }

    #[test]
    fn resolve_custom_wrong_length_falls_through() {
        let lists = lists();
        let selector = PuzzleSelector::new(&lists, EPOCH);
        let request = PuzzleRequest::daily(five(), 0)
            .with_custom(Some(CustomPuzzle::new("menyasszony", Some("Anna".to_string()))));

        let puzzle = selector.resolve(&request, EPOCH);
        assert_eq!(puzzle.solution(), &Word::from_text("kalap"));
        assert_eq!(puzzle.solution_creator(), None);
    }
}
