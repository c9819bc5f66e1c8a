//! Share text and emoji grid
//!
//! The share text is pasted by players into chats and social media, so its
//! layout and glyphs stay fixed:
//!
//! ```text
//! Szózat - 137. nap, 2022. 05. 18. - 4/8
//!
//!
//! ⬜🟨⬜⬜🟩
//! ...
//!
//! https://szozat.idavid.hu
//! ```

use crate::core::{Pattern, Word};
use crate::puzzle::{Difficulty, Puzzle, PuzzleSource};
use chrono::{Days, NaiveDate};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Glyph for each letter of a row not played yet
pub const UNPLAYED: char = '⬛';

const TITLE: &str = "Szózat";

/// Render the guesses as rows of emoji, padded to `max_guesses` rows
///
/// # Examples
/// ```
/// use szozat::core::Word;
/// use szozat::share::emoji_grid;
///
/// let secret = Word::from_text("ház");
/// let grid = emoji_grid(&[Word::from_text("kéz")], &secret, 2);
/// assert_eq!(grid, "⬜⬜🟩\n⬛⬛⬛");
/// ```
#[must_use]
pub fn emoji_grid(guesses: &[Word], secret: &Word, max_guesses: usize) -> String {
    let played = guesses
        .iter()
        .map(|guess| Pattern::calculate(guess, secret).to_emoji());
    let unplayed = std::iter::repeat_n(
        UNPLAYED.to_string().repeat(secret.len()),
        max_guesses.saturating_sub(guesses.len()),
    );

    played.chain(unplayed).collect::<Vec<_>>().join("\n")
}

/// Everything the share text is built from
#[derive(Debug, Clone, Copy)]
pub struct ShareRequest<'a> {
    pub guesses: &'a [Word],
    pub puzzle: &'a Puzzle,
    pub difficulty: Difficulty,
    pub lost: bool,
    /// Include the `Megfejtés:` line
    pub reveal_solution: bool,
    /// First day of the daily series
    pub epoch: NaiveDate,
    pub origin: &'a str,
}

/// Human readable name of the puzzle
#[must_use]
pub fn identifier(puzzle: &Puzzle, epoch: NaiveDate) -> String {
    match puzzle.source() {
        PuzzleSource::Custom { creator } => format!("Egyéni feladvány: {creator}"),
        PuzzleSource::Daily { index, .. } => {
            let date = u64::try_from(*index)
                .ok()
                .and_then(|days| epoch.checked_add_days(Days::new(days)))
                .unwrap_or(epoch);
            format!("{index}. nap, {}", date.format("%Y. %m. %d."))
        }
        PuzzleSource::Random { index } => format!("Véletlen feladvány: {index}."),
        PuzzleSource::Pending => "-".to_string(),
    }
}

/// Build the share text of a finished game
#[must_use]
pub fn share_text(request: &ShareRequest<'_>) -> String {
    let score = if request.lost {
        "X".to_string()
    } else {
        request.guesses.len().to_string()
    };
    let solution_line = if request.reveal_solution {
        format!("Megfejtés: {}", request.puzzle.solution())
    } else {
        String::new()
    };
    let max_guesses = request.difficulty.max_guesses();

    format!(
        "{TITLE} - {} - {score}/{max_guesses}\n{solution_line}\n\n{}\n\n{}",
        identifier(request.puzzle, request.epoch),
        emoji_grid(request.guesses, request.puzzle.solution(), max_guesses),
        request.origin,
    )
}

/// Where share text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareTarget {
    Stdout,
    File(PathBuf),
}

/// How share text was delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Printed,
    Saved(PathBuf),
}

/// Error type for share delivery
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("Could not write the share text to {path}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not print the share text")]
    Stdout(#[source] io::Error),
}

/// Deliver share text
///
/// # Errors
///
/// Returns `ShareError` when the target cannot be written. Callers report it
/// to the player and carry on.
pub fn deliver(text: &str, target: &ShareTarget) -> Result<ShareOutcome, ShareError> {
    match target {
        ShareTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")
                .and_then(|()| stdout.flush())
                .map_err(ShareError::Stdout)?;
            Ok(ShareOutcome::Printed)
        }
        ShareTarget::File(path) => {
            fs::write(path, format!("{text}\n")).map_err(|source| ShareError::File {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "saved share text");
            Ok(ShareOutcome::Saved(path.clone()))
        }
    }
}
