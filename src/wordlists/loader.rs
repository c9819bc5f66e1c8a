//! Word list loading utilities
//!
//! External lists come either as plain text (one word per line) or as JSON
//! arrays of letter units, the form the web game ships:
//! `[["K","A","L","A","P"], ["SZ","É","K","E","K"]]`.

use crate::core::Word;
use crate::puzzle::Difficulty;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for word list loading
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Failed to read word list {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON word list {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Word list {0} contains no {1}-letter words")]
    Empty(PathBuf, Difficulty),
}

/// Load the words of `difficulty` from a TXT or JSON file
///
/// Entries with a different number of letter units are skipped. A `.json`
/// extension selects the unit-array format, anything else is read as text.
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read or parsed, or holds no
/// word of the requested length.
///
/// # Examples
/// ```no_run
/// use szozat::puzzle::Difficulty;
/// use szozat::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/puzzles-5.txt", Difficulty::default()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    difficulty: Difficulty,
) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        words_from_json(&content, difficulty).map_err(|source| WordListError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        words_from_text(&content, difficulty)
    };

    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf(), difficulty));
    }

    tracing::info!(path = %path.display(), %difficulty, count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse one word per line, skipping blank lines
#[must_use]
pub fn words_from_text(content: &str, difficulty: Difficulty) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::parse(line, difficulty.word_length()).ok())
        .collect()
}

/// Parse a JSON array of letter-unit arrays
///
/// # Errors
///
/// Returns the `serde_json` error when the document is not an array of string
/// arrays. Entries with unknown units or the wrong length are skipped.
pub fn words_from_json(content: &str, difficulty: Difficulty) -> serde_json::Result<Vec<Word>> {
    let entries: Vec<Vec<String>> = serde_json::from_str(content)?;
    Ok(entries
        .iter()
        .filter_map(|units| Word::from_units(units).ok())
        .filter(|word| word.len() == difficulty.word_length())
        .collect())
}

/// Convert an embedded string slice to words of `difficulty`
///
/// # Examples
/// ```
/// use szozat::puzzle::Difficulty;
/// use szozat::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["kalap", "szegény", "ház"], Difficulty::default());
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], difficulty: Difficulty) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::parse(s, difficulty.word_length()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn five() -> Difficulty {
        Difficulty::default()
    }

    #[test]
    fn words_from_slice_counts_letter_units() {
        // "szegény" has seven characters but five letters
        let words = words_from_slice(&["kalap", "szegény", "gyöngy", "ház"], five());

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "KALAP");
        assert_eq!(words[1].text(), "SZEGÉNY");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, five()).is_empty());
    }

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("kalap\n\n  labda \nház\n", five());
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "LABDA");
    }

    #[test]
    fn words_from_json_unit_arrays() {
        let json = r#"[["K","A","L","A","P"], ["SZ","É","K","E","K"], ["H","Á","Z"], ["K","AA","L","A","P"]]"#;
        let words = words_from_json(json, five()).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1], Word::from_text("székek"));
    }

    #[test]
    fn words_from_json_rejects_bad_shape() {
        assert!(words_from_json(r#"{"words": []}"#, five()).is_err());
    }

    #[test]
    fn load_from_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "kalap\nlabda\nház").unwrap();

        let words = load_from_file(file.path(), five()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[["A","L","M","A"]]"#).unwrap();

        let words = load_from_file(file.path(), Difficulty::new(4).unwrap()).unwrap();
        assert_eq!(words, [Word::from_text("alma")]);
    }

    #[test]
    fn load_missing_file() {
        let result = load_from_file("/nonexistent/szavak.txt", five());
        assert!(matches!(result, Err(WordListError::Read { .. })));
    }

    #[test]
    fn load_file_without_matching_words() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "ház\nkör").unwrap();

        let result = load_from_file(file.path(), five());
        assert!(matches!(result, Err(WordListError::Empty(..))));
    }
}
