//! Core domain types for the code-breaking game
//!
//! Codes, feedback scoring and secret generation. Nothing in here knows about
//! time, sessions or the terminal.

mod code;
mod feedback;
mod secret;

pub use code::{CODE_LENGTH, Code, CodeError, MAX_DIGIT};
pub use feedback::{FeedbackRow, Mark, evaluate};
pub use secret::{FixedSecret, RandomSecret, SecretGenerator};
