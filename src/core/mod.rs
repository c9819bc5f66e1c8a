//! Core domain types for the puzzle
//!
//! Letter units, words, feedback statuses and the keyboard fold. Everything
//! here is pure and free of I/O, so it is safe to share across threads.

mod keyboard;
mod letter;
mod pattern;
mod status;
mod word;

pub use keyboard::Keyboard;
pub use letter::{Letter, LetterKind, fold};
pub use pattern::Pattern;
pub use status::GuessStatus;
pub use word::{Word, WordError, tokenize};
