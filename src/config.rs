//! Runtime configuration
//!
//! Gathers the command line settings and the values derived from them.

use crate::puzzle::Difficulty;
use crate::storage::Store;
use crate::wordlists::{WordListError, WordLists, loader};
use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};
use std::path::PathBuf;

/// Origin put at the end of share text and in puzzle links
pub const DEFAULT_ORIGIN: &str = "https://szozat.idavid.hu";

/// Data directory name under the home directory
const DATA_DIR_NAME: &str = ".szozat";

/// First day of the daily series
#[must_use]
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default()
}

/// Milliseconds since the Unix epoch of local midnight starting `date`
///
/// Falls back to UTC midnight when local midnight does not exist (DST gap).
#[must_use]
pub fn local_midnight_ms(date: NaiveDate) -> i64 {
    midnight_ms(date, &Local)
}

fn midnight_ms<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .map_or_else(|| midnight.and_utc().timestamp_millis(), |dt| dt.timestamp_millis())
}

/// Current time in milliseconds since the Unix epoch
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// `~/.szozat`, or `.szozat` in the working directory without a home
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Where the daily puzzles come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    Embedded,
    /// TXT or JSON file replacing the daily list of the chosen difficulty
    File(PathBuf),
}

impl WordListSource {
    /// `embedded` (or an empty value) selects the built-in lists, anything
    /// else is a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings of one run
#[derive(Debug, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    pub wordlist: WordListSource,
    pub data_dir: PathBuf,
    pub origin: String,
    pub epoch: NaiveDate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            wordlist: WordListSource::Embedded,
            data_dir: default_data_dir(),
            origin: DEFAULT_ORIGIN.to_string(),
            epoch: epoch_date(),
        }
    }
}

impl Config {
    /// Start of the daily series in local time
    #[must_use]
    pub fn epoch_ms(&self) -> i64 {
        local_midnight_ms(self.epoch)
    }

    #[must_use]
    pub fn store(&self) -> Store {
        Store::new(&self.data_dir)
    }

    /// Word lists for this run
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if a configured list file cannot be loaded.
    pub fn word_lists(&self) -> Result<WordLists, WordListError> {
        let lists = WordLists::embedded();
        match &self.wordlist {
            WordListSource::Embedded => Ok(lists),
            WordListSource::File(path) => {
                let puzzles = loader::load_from_file(path, self.difficulty)?;
                Ok(lists.with_puzzles(self.difficulty, puzzles))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn epoch_is_new_year_2022() {
        assert_eq!(epoch_date().to_string(), "2022-01-01");
    }

    #[test]
    fn midnight_in_utc() {
        assert_eq!(midnight_ms(epoch_date(), &Utc), 1_640_995_200_000);
    }

    #[test]
    fn midnight_in_fixed_offset() {
        // Budapest winter time
        let cet = chrono::FixedOffset::east_opt(3600).unwrap();
        assert_eq!(midnight_ms(epoch_date(), &cet), 1_640_995_200_000 - 3_600_000);
    }

    #[test]
    fn wordlist_source_parse() {
        assert_eq!(WordListSource::parse("embedded"), WordListSource::Embedded);
        assert_eq!(WordListSource::parse(""), WordListSource::Embedded);
        assert_eq!(
            WordListSource::parse("szavak.json"),
            WordListSource::File(PathBuf::from("szavak.json"))
        );
    }

    #[test]
    fn word_lists_from_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "kalap\nlabda").unwrap();

        let config = Config {
            wordlist: WordListSource::File(file.path().to_path_buf()),
            ..Config::default()
        };
        let lists = config.word_lists().unwrap();
        assert_eq!(lists.puzzles(config.difficulty).len(), 2);
    }

    #[test]
    fn word_lists_missing_file() {
        let config = Config {
            wordlist: WordListSource::File(PathBuf::from("/nonexistent/lista.txt")),
            ..Config::default()
        };
        assert!(config.word_lists().is_err());
    }
}
