//! Szózat
//!
//! Hungarian Wordle. Words are made of letter units rather than characters,
//! so digraphs such as "SZ" or "GY" and the trigraph "DZS" count as one
//! letter, and a guess is scored with an extra marker when a letter appears a
//! different number of times in the guess and in the solution.
//!
//! # Quick Start
//!
//! ```rust
//! use szozat::core::{GuessStatus, Pattern, Word};
//!
//! let answer = Word::from_text("szegény");
//! let guess = Word::from_text("szemek");
//! assert_eq!(answer.len(), 5);
//!
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert_eq!(pattern.statuses()[0], GuessStatus::Correct);
//! ```

// Core domain types
pub mod core;

// Puzzle selection and custom links
pub mod puzzle;

// Word lists
pub mod wordlists;

// Game rules, statistics and sharing
pub mod game;
pub mod share;
pub mod stats;

// Saved games and statistics
pub mod storage;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
