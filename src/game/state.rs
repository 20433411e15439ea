//! Session states, outcomes and snapshots

use super::config::LOW_TIME_THRESHOLD;
use crate::core::{Code, FeedbackRow};
use std::fmt;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Booting,
    Active,
    Won,
    Lost,
}

impl GameState {
    /// Check if the session has ended
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Booting => "booting",
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossCause {
    AttemptsExhausted,
    TimeExpired,
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost(LossCause),
}

impl Outcome {
    /// State the session ends in for this outcome
    #[must_use]
    pub const fn state(self) -> GameState {
        match self {
            Self::Won => GameState::Won,
            Self::Lost(_) => GameState::Lost,
        }
    }
}

/// Identifies one `start()`/`reset()` cycle of a session
///
/// Timer signals carry the generation they were scheduled for so that a
/// late signal from an earlier cycle can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// The generation that follows this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw counter value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything a view needs to draw the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: Generation,
    pub state: GameState,
    pub attempts_used: u8,
    pub remaining_seconds: u32,
    pub history: Vec<FeedbackRow>,
    pub outcome: Option<Outcome>,
    /// Only revealed once the session is over
    pub secret: Option<Code>,
}

impl Snapshot {
    /// Most recent feedback row, if any guess was scored
    #[must_use]
    pub fn latest(&self) -> Option<&FeedbackRow> {
        self.history.last()
    }

    /// Check if the clock should be shown as urgent
    #[must_use]
    pub const fn is_time_low(&self) -> bool {
        self.remaining_seconds <= LOW_TIME_THRESHOLD
    }
}
