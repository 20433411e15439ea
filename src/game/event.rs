//! Notifications broadcast after every session transition

use super::state::Snapshot;
use crate::core::{Code, FeedbackRow};

/// A session transition, with the state it left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// `start()` or `reset()` entered the boot sequence
    Booting(Snapshot),
    /// Boot finished; the countdown is running
    Activated(Snapshot),
    /// One second elapsed
    Ticked(Snapshot),
    /// A guess was scored and appended to the history
    GuessScored {
        guess: Code,
        row: FeedbackRow,
        snapshot: Snapshot,
    },
    /// The session reached `Won` or `Lost`
    Finished(Snapshot),
}

impl GameEvent {
    /// State of the session right after this event
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        match self {
            Self::Booting(snapshot)
            | Self::Activated(snapshot)
            | Self::Ticked(snapshot)
            | Self::Finished(snapshot)
            | Self::GuessScored { snapshot, .. } => snapshot,
        }
    }
}
