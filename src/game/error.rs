//! Errors returned by session commands

use super::state::GameState;
use crate::core::CodeError;
use thiserror::Error;

/// A rejected player action
///
/// Both variants leave the session unchanged; the caller may simply retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] CodeError),

    #[error("cannot accept a guess while the session is {state}")]
    IllegalState { state: GameState },
}
