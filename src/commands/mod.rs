//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayerAction, parse_action, run_play};
pub use score::{ScoreResult, score_guess};
