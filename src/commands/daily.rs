//! Daily puzzle information
//!
//! Reports which daily puzzle is active and when the next one unlocks,
//! without revealing the word.

use crate::puzzle::{DailyIndex, Difficulty, MS_IN_DAY, daily_index};
use chrono::{Days, NaiveDate};

/// The daily puzzle at some moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyInfo {
    pub difficulty: Difficulty,
    /// Days since the epoch
    pub day_number: i64,
    /// Position in the daily list, shown as the puzzle number
    pub index: usize,
    pub list_len: usize,
    pub date: NaiveDate,
    /// Milliseconds until the next puzzle
    pub remaining_ms: i64,
}

/// Describe the daily puzzle `day` days from `now_ms`
///
/// Returns `None` when the daily list is empty or the offset is too large to
/// represent as a time.
#[must_use]
pub fn daily_info(
    difficulty: Difficulty,
    list_len: usize,
    day: i64,
    now_ms: i64,
    epoch_ms: i64,
    epoch: NaiveDate,
) -> Option<DailyInfo> {
    let DailyIndex {
        day_number,
        index,
        tomorrow,
    } = daily_index(day, now_ms, epoch_ms, list_len)?;
    let shifted = day.checked_mul(MS_IN_DAY)?.checked_add(now_ms)?;

    let date = if day_number >= 0 {
        u64::try_from(day_number)
            .ok()
            .and_then(|days| epoch.checked_add_days(Days::new(days)))
    } else {
        epoch.checked_sub_days(Days::new(day_number.unsigned_abs()))
    }
    .unwrap_or(epoch);

    Some(DailyInfo {
        difficulty,
        day_number,
        index,
        list_len,
        date,
        remaining_ms: (tomorrow - shifted).max(0),
    })
}
