//! Formatting utilities for terminal output

use crate::core::{GuessStatus, Keyboard, Letter, Pattern, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard rows: digraphs first, then a Hungarian QWERTZ layout
pub const KEYBOARD_LAYOUT: [&[&str]; 4] = [
    &["CS", "DZ", "DZS", "GY", "LY", "NY", "SZ", "TY", "ZS", "Ö", "Ü", "Ó"],
    &["Q", "W", "E", "R", "T", "Z", "U", "I", "O", "P", "Ő", "Ú"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L", "É", "Á", "Ű"],
    &["Í", "Y", "X", "C", "V", "B", "N", "M"],
];

/// Tile colour of a status as RGB
///
/// The `-diff` variants use a darker shade of the same colour.
#[must_use]
pub const fn status_rgb(status: GuessStatus) -> (u8, u8, u8) {
    match status {
        GuessStatus::Correct => (0x21, 0xc5, 0x5d),
        GuessStatus::CorrectDiff => (0x16, 0xa3, 0x49),
        GuessStatus::Present => (0xea, 0xb3, 0x08),
        GuessStatus::PresentDiff => (0xca, 0x8a, 0x04),
        GuessStatus::Absent => (0x94, 0xa4, 0xb8),
    }
}

/// One letter as a coloured tile, padded to three columns for trigraphs
#[must_use]
pub fn letter_tile(unit: &str, status: Option<GuessStatus>) -> ColoredString {
    let text = format!(" {unit:<3}");
    match status {
        Some(status) => {
            let (r, g, b) = status_rgb(status);
            text.black().bold().on_truecolor(r, g, b)
        }
        None => text.bright_white().on_truecolor(0x33, 0x41, 0x55),
    }
}

/// A guess as a row of coloured tiles
#[must_use]
pub fn pattern_row(guess: &Word, pattern: &Pattern) -> String {
    guess
        .units()
        .iter()
        .zip(pattern.statuses())
        .map(|(unit, &status)| letter_tile(unit, Some(status)).to_string())
        .collect()
}

/// The keyboard as rows of tiles coloured by the best known status
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|&unit| {
                    let status = Letter::from_unit(unit).and_then(|letter| keyboard.status(letter));
                    letter_tile(unit, status).to_string()
                })
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        let width_u64 = u64::try_from(width).unwrap_or(u64::MAX);
        usize::try_from(value.min(max) * width_u64 / max).unwrap_or(width)
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format milliseconds as `HH:MM:SS`, clamping negative values to zero
#[must_use]
pub fn format_countdown(ms: i64) -> String {
    let seconds = ms.max(0) / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}
