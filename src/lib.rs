//! Codebreach
//!
//! Engine for a timed code-breaking game: crack a 4-digit code in 6 attempts
//! before a 60-second clock runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreach::core::{Code, FeedbackRow, Mark};
//!
//! let secret = Code::parse("1234").unwrap();
//! let guess = Code::parse("1156").unwrap();
//!
//! // Misplaced digits are a plain membership test: both 1s count
//! let row = FeedbackRow::calculate(&guess, &secret);
//! assert_eq!(row.marks(), &[Mark::Exact, Mark::Present, Mark::Absent, Mark::Absent]);
//! ```

// Core domain types
pub mod core;

// Session state machine and timers
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
