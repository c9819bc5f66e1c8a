//! Word list validation
//!
//! Tokenizes every word of every list and reports the ones that would not
//! play correctly: wrong letter unit count, characters outside the alphabet,
//! duplicates, and daily words missing from the accepted list.

use crate::core::{Word, fold};
use crate::puzzle::Difficulty;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Which list of a difficulty a word comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Puzzles,
    All,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Puzzles => "puzzles",
            Self::All => "all",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Tokenizes to this many letter units instead of the word length
    WrongLength(usize),
    /// Some characters are not part of any letter unit
    DroppedCharacters(String),
    Duplicate,
    /// A daily word that is not accepted as a guess
    MissingFromAll,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(units) => write!(f, "{units} letter units"),
            Self::DroppedCharacters(kept) => write!(f, "unknown characters, reads as {kept}"),
            Self::Duplicate => f.write_str("duplicate"),
            Self::MissingFromAll => f.write_str("not in the accepted list"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub difficulty: Difficulty,
    pub list: ListKind,
    pub word: String,
    pub kind: IssueKind,
}

#[derive(Debug)]
pub struct ValidationReport {
    pub words_checked: usize,
    pub issues: Vec<Issue>,
    pub duration: Duration,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Progress bar sized for `len` words
#[must_use]
pub fn validation_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Problem with a single word, if any
fn check_word(raw: &str, difficulty: Difficulty) -> Option<IssueKind> {
    let word = Word::from_text(raw);
    let text = word.text();
    if text != fold(raw.trim()) {
        return Some(IssueKind::DroppedCharacters(text));
    }
    (word.len() != difficulty.word_length()).then(|| IssueKind::WrongLength(word.len()))
}

/// Validate the raw lists, indexed by `difficulty - 3`
///
/// Words are tokenized in parallel; `progress` advances once per word.
#[must_use]
pub fn validate_lists(
    puzzles: &[&[&str]; 7],
    all: &[&[&str]; 7],
    progress: &ProgressBar,
) -> ValidationReport {
    let start = Instant::now();

    let jobs: Vec<(Difficulty, ListKind, &str)> = Difficulty::ALL
        .iter()
        .flat_map(|&difficulty| {
            let index = difficulty.index();
            let daily = puzzles[index]
                .iter()
                .map(move |&raw| (difficulty, ListKind::Puzzles, raw));
            let accepted = all[index]
                .iter()
                .map(move |&raw| (difficulty, ListKind::All, raw));
            daily.chain(accepted)
        })
        .collect();

    let mut issues: Vec<Issue> = jobs
        .par_iter()
        .filter_map(|&(difficulty, list, raw)| {
            progress.inc(1);
            check_word(raw, difficulty).map(|kind| Issue {
                difficulty,
                list,
                word: raw.to_string(),
                kind,
            })
        })
        .collect();

    for difficulty in Difficulty::ALL {
        let index = difficulty.index();
        issues.extend(duplicates(difficulty, ListKind::Puzzles, puzzles[index]));
        issues.extend(duplicates(difficulty, ListKind::All, all[index]));

        let accepted: FxHashSet<Word> = all[index].iter().map(|raw| Word::from_text(raw)).collect();
        issues.extend(
            puzzles[index]
                .iter()
                .filter(|raw| !accepted.contains(&Word::from_text(raw)))
                .map(|raw| Issue {
                    difficulty,
                    list: ListKind::Puzzles,
                    word: (*raw).to_string(),
                    kind: IssueKind::MissingFromAll,
                }),
        );
    }

    progress.finish_with_message(format!("{} issues", issues.len()));
    tracing::info!(words = jobs.len(), issues = issues.len(), "validated word lists");

    ValidationReport {
        words_checked: jobs.len(),
        issues,
        duration: start.elapsed(),
    }
}

fn duplicates(difficulty: Difficulty, list: ListKind, words: &[&str]) -> Vec<Issue> {
    let mut seen = FxHashSet::default();
    words
        .iter()
        .filter(|raw| !seen.insert(Word::from_text(raw)))
        .map(|raw| Issue {
            difficulty,
            list,
            word: (*raw).to_string(),
            kind: IssueKind::Duplicate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ALL, PUZZLES};

    const NONE: &[&str] = &[];

    type Lists = [&'static [&'static str]; 7];

    fn lists_with_five(puzzles: &'static [&'static str], all: &'static [&'static str]) -> (Lists, Lists) {
        let mut daily = [NONE; 7];
        let mut accepted = [NONE; 7];
        daily[2] = puzzles;
        accepted[2] = all;
        (daily, accepted)
    }

    #[test]
    fn embedded_lists_are_clean() {
        let report = validate_lists(&PUZZLES, &ALL, &ProgressBar::hidden());
        assert!(report.words_checked > 0);
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn digraph_words_count_as_units() {
        let five = Difficulty::default();
        assert_eq!(check_word("szegény", five), None);
        assert_eq!(check_word("kalap", five), None);
        assert_eq!(check_word("szegények", five), Some(IssueKind::WrongLength(7)));
    }

    #[test]
    fn foreign_characters_are_reported() {
        assert_eq!(
            check_word("ka1lap", Difficulty::default()),
            Some(IssueKind::DroppedCharacters("KALAP".to_string()))
        );
    }

    #[test]
    fn list_issues() {
        let (daily, accepted) =
            lists_with_five(&["kalap", "kalap", "fotel"], &["kalap", "labda", "abc"]);
        let report = validate_lists(&daily, &accepted, &ProgressBar::hidden());

        assert_eq!(report.words_checked, 6);
        let kinds: Vec<_> = report
            .issues
            .iter()
            .map(|issue| (issue.list, issue.word.as_str(), &issue.kind))
            .collect();
        assert!(kinds.contains(&(ListKind::All, "abc", &IssueKind::WrongLength(3))));
        assert!(kinds.contains(&(ListKind::Puzzles, "kalap", &IssueKind::Duplicate)));
        assert!(kinds.contains(&(ListKind::Puzzles, "fotel", &IssueKind::MissingFromAll)));
        assert_eq!(report.issues.len(), 3);
    }
}
