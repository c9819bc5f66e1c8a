//! Per-letter feedback status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for one guessed letter
///
/// The `-Diff` variants carry the same match class as their plain
/// counterparts; they additionally mark that the answer holds more copies of the
/// letter than the guess supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuessStatus {
    Correct,
    CorrectDiff,
    Present,
    PresentDiff,
    Absent,
}

impl GuessStatus {
    /// Status for a letter in the right position
    #[must_use]
    pub const fn correct(diff: bool) -> Self {
        if diff { Self::CorrectDiff } else { Self::Correct }
    }

    /// Status for a letter present elsewhere in the answer
    #[must_use]
    pub const fn present(diff: bool) -> Self {
        if diff { Self::PresentDiff } else { Self::Present }
    }

    /// Match class ordering used by the keyboard: absent < present < correct
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present | Self::PresentDiff => 1,
            Self::Correct | Self::CorrectDiff => 2,
        }
    }

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::CorrectDiff)
    }

    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present | Self::PresentDiff)
    }

    #[must_use]
    pub const fn is_diff(self) -> bool {
        matches!(self, Self::CorrectDiff | Self::PresentDiff)
    }

    /// Whether this status may replace `previous` on the keyboard
    #[must_use]
    pub const fn supersedes(self, previous: Self) -> bool {
        self.rank() >= previous.rank()
    }

    /// Share-grid glyph
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct | Self::CorrectDiff => '🟩',
            Self::Present | Self::PresentDiff => '🟨',
            Self::Absent => '⬜',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::CorrectDiff => "correct-diff",
            Self::Present => "present",
            Self::PresentDiff => "present-diff",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for GuessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
