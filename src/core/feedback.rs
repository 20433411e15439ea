//! Guess evaluation and feedback rows
//!
//! Each guess position gets one mark:
//! - `Exact`: the digit matches the secret at the same position
//! - `Present`: the digit appears somewhere else in the secret
//! - `Absent`: the digit does not appear in the secret
//!
//! `Present` is a plain membership test. Unlike classic Mastermind scoring,
//! secret digits are not consumed as they are matched, so a single `1` in the
//! secret marks every misplaced `1` in the guess as `Present`.

use super::code::{CODE_LENGTH, Code, CodeError};
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '🟥',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([Mark; CODE_LENGTH]);

impl FeedbackRow {
    /// All exact (code cracked)
    pub const SOLVED: Self = Self([Mark::Exact; CODE_LENGTH]);

    /// Build a row from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; CODE_LENGTH]) -> Self {
        Self(marks)
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use codebreach::core::{Code, FeedbackRow, Mark};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1324").unwrap();
    /// let row = FeedbackRow::calculate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     row.marks(),
    ///     &[Mark::Exact, Mark::Present, Mark::Present, Mark::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let mut marks = [Mark::Absent; CODE_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            let digit = guess.digit_at(i);
            *mark = if digit == secret.digit_at(i) {
                Mark::Exact
            } else if secret.contains(digit) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }

        Self(marks)
    }

    /// Get the marks in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; CODE_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the number of exact marks
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert the row to an emoji string like "🟩🟨🟥🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Validate raw guess digits and score them against `secret`
///
/// # Errors
/// Returns `CodeError` if `guess` is not exactly four values in 0-9.
pub fn evaluate(secret: &Code, guess: &[u8]) -> Result<FeedbackRow, CodeError> {
    let guess = Code::from_digits(guess)?;
    Ok(FeedbackRow::calculate(&guess, secret))
}
