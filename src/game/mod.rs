//! Session engine
//!
//! Composes the core types with a countdown into the boot, play and outcome
//! lifecycle, and reports every transition as a `GameEvent`.

pub mod config;
mod error;
mod event;
mod session;
mod state;
pub mod timer;

pub use config::{DEFAULT_BOOT_MS, GameConfig, LOW_TIME_THRESHOLD, MAX_ATTEMPTS, ROUND_SECONDS};
pub use error::GameError;
pub use event::GameEvent;
pub use session::GameSession;
pub use state::{GameState, Generation, LossCause, Outcome, Snapshot};
pub use timer::{TimerService, TimerSignal};
