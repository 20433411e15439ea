//! Four-digit code representation
//!
//! A `Code` is used both for the secret and for each guess. Construction is
//! the only place digits are validated; every `Code` in the program holds
//! exactly four digits in 0-9.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a secret or a guess
pub const CODE_LENGTH: usize = 4;

/// Largest digit value a code may contain
pub const MAX_DIGIT: u8 = 9;

/// A four-digit code, repetition allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must be exactly {CODE_LENGTH} digits, got {0}")]
    InvalidLength(usize),

    #[error("'{found}' at position {position} is not a digit")]
    InvalidDigit { position: usize, found: char },

    #[error("digit {value} at position {position} is out of range 0-{MAX_DIGIT}")]
    DigitOutOfRange { position: usize, value: u8 },
}

impl Code {
    /// Create a code from four digit values
    ///
    /// # Errors
    /// Returns `CodeError::DigitOutOfRange` if any value is above 9.
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some((position, &value)) = digits
            .iter()
            .enumerate()
            .find(|&(_, &d)| d > MAX_DIGIT)
        {
            return Err(CodeError::DigitOutOfRange { position, value });
        }
        Ok(Self(digits))
    }

    /// Create a code from a slice of digit values
    ///
    /// # Errors
    /// Returns `CodeError` if the slice is not exactly four values in 0-9.
    pub fn from_digits(digits: &[u8]) -> Result<Self, CodeError> {
        let array: [u8; CODE_LENGTH] = digits
            .try_into()
            .map_err(|_| CodeError::InvalidLength(digits.len()))?;
        Self::new(array)
    }

    /// Draw four independent uniform digits from `rng`
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        for digit in &mut digits {
            *digit = rng.random_range(0..=MAX_DIGIT);
        }
        Self(digits)
    }

    /// Parse a code from player input such as `"0427"`
    ///
    /// Surrounding whitespace is ignored. Only ASCII digits are accepted.
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the trimmed input is not four
    /// characters long, `CodeError::InvalidDigit` if any character is not a digit.
    ///
    /// # Examples
    /// ```
    /// use codebreach::core::Code;
    ///
    /// let code = Code::parse(" 0427 ").unwrap();
    /// assert_eq!(code.digits(), &[0, 4, 2, 7]);
    ///
    /// assert!(Code::parse("12a4").is_err());
    /// assert!(Code::parse("123").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let trimmed = input.trim();
        let length = trimmed.chars().count();
        if length != CODE_LENGTH {
            return Err(CodeError::InvalidLength(length));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (position, ch) in trimmed.chars().enumerate() {
            // to_digit only recognises ASCII digits, so value is 0-9
            let value = ch
                .to_digit(10)
                .ok_or(CodeError::InvalidDigit { position, found: ch })?;
            digits[position] = value as u8;
        }

        Ok(Self(digits))
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the code contains a digit anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
