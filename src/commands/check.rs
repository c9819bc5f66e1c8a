//! Guess check command
//!
//! Evaluates one guess against a given secret without touching any state.

use crate::core::{Keyboard, Pattern, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub pattern: Pattern,
    pub keyboard: Keyboard,
}

/// Evaluate `guess` against `secret`
///
/// Both words are tokenized first; the guess must have as many letter units
/// as the secret.
///
/// # Errors
///
/// Returns `WordError::InvalidLength` if the secret is empty or the guess
/// length differs from it.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::from_text(secret);
    if secret.is_empty() {
        return Err(WordError::InvalidLength {
            expected: 1,
            actual: 0,
        });
    }
    let guess = Word::parse(guess, secret.len())?;

    let pattern = Pattern::calculate(&guess, &secret);
    let mut keyboard = Keyboard::new();
    keyboard.record(&guess, &pattern);

    Ok(CheckResult {
        secret,
        guess,
        pattern,
        keyboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessStatus;

    #[test]
    fn check_counts_letter_units() {
        let result = check_guess("kalap", "kabát").unwrap();
        assert_eq!(result.guess.len(), 5);
        assert_eq!(result.pattern.statuses()[1], GuessStatus::CorrectDiff);
        assert_eq!(result.keyboard.len(), 5);
    }

    #[test]
    fn check_digraph_words() {
        // GYÖNGY holds two GY's, GYŰRŰ one
        let result = check_guess("gyöngy", "gyűrű").unwrap();
        assert_eq!(result.guess.len(), 4);
        assert_eq!(result.pattern.statuses()[0], GuessStatus::CorrectDiff);
    }

    #[test]
    fn check_length_mismatch() {
        assert_eq!(
            check_guess("kalap", "ház").err(),
            Some(WordError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn check_empty_secret() {
        assert!(check_guess("123", "ház").is_err());
    }
}
