//! Fixed game rules and runtime knobs

use std::time::Duration;

/// Guesses allowed per session
pub const MAX_ATTEMPTS: u8 = 6;

/// Length of the countdown in seconds
pub const ROUND_SECONDS: u32 = 60;

/// Interval between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Remaining seconds at or below which the clock is shown as urgent
pub const LOW_TIME_THRESHOLD: u32 = 10;

/// Length of the boot sequence in milliseconds
pub const DEFAULT_BOOT_MS: u64 = 7000;

/// Length of the boot sequence before a session becomes active
pub const DEFAULT_BOOT_DELAY: Duration = Duration::from_millis(DEFAULT_BOOT_MS);

/// Session settings that may vary between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Delay between `start()` and the session becoming active
    pub boot_delay: Duration,
}

impl GameConfig {
    /// Create a config with the default boot delay
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boot_delay: DEFAULT_BOOT_DELAY,
        }
    }

    /// Override the boot delay; zero activates immediately
    #[must_use]
    pub const fn with_boot_delay(mut self, boot_delay: Duration) -> Self {
        self.boot_delay = boot_delay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
