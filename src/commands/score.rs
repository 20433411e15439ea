//! One-shot scoring command
//!
//! Evaluates a single guess against a given secret without running a session.

use crate::core::{Code, FeedbackRow};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub row: FeedbackRow,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either argument is not exactly four digits.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Code::parse(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Code::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(ScoreResult {
        secret,
        guess,
        row: FeedbackRow::calculate(&guess, &secret),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn scores_valid_pair() {
        let result = score_guess("1234", "1156").unwrap();

        assert_eq!(result.secret.to_string(), "1234");
        assert_eq!(
            result.row.marks(),
            &[Mark::Exact, Mark::Present, Mark::Absent, Mark::Absent]
        );
    }

    #[test]
    fn rejects_bad_secret() {
        let err = score_guess("12", "1234").err().unwrap();
        assert!(err.starts_with("Invalid secret"));
    }

    #[test]
    fn rejects_bad_guess() {
        let err = score_guess("1234", "12a4").err().unwrap();
        assert!(err.starts_with("Invalid guess"));
    }
}
