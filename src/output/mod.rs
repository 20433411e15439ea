//! Terminal output formatting
//!
//! The view layer: draws session events and command results.

pub mod display;
pub mod formatters;

pub use display::{Console, print_score_result};
