//! Formatting utilities for terminal output

use crate::core::{Code, FeedbackRow, Mark};
use crate::game::{LOW_TIME_THRESHOLD, MAX_ATTEMPTS, ROUND_SECONDS};
use colored::Colorize;

/// Color each guessed digit by its mark: green exact, yellow present, red absent
#[must_use]
pub fn colored_guess(guess: &Code, row: &FeedbackRow) -> String {
    guess
        .digits()
        .iter()
        .zip(row.marks())
        .map(|(digit, mark)| {
            let text = digit.to_string();
            let painted = match mark {
                Mark::Exact => text.bright_green().bold(),
                Mark::Present => text.bright_yellow().bold(),
                Mark::Absent => text.bright_red(),
            };
            format!("{painted} ")
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the countdown is left
#[must_use]
pub fn time_bar(remaining_seconds: u32, width: usize) -> String {
    create_progress_bar(
        f64::from(remaining_seconds),
        f64::from(ROUND_SECONDS),
        width,
    )
}

/// Format the attempt counter as "used/max"
#[must_use]
pub fn format_attempts(attempts_used: u8) -> String {
    format!("{attempts_used}/{MAX_ATTEMPTS}")
}

/// Whether a countdown value is worth printing in a line-based terminal
///
/// Every ten seconds, then every second for the final five.
#[must_use]
pub const fn should_announce(remaining_seconds: u32) -> bool {
    remaining_seconds % 10 == 0 || remaining_seconds <= 5
}

/// Clock text, red once time is running low
#[must_use]
pub fn format_clock(remaining_seconds: u32) -> String {
    let text = format!("{remaining_seconds:>2}s");
    if remaining_seconds <= LOW_TIME_THRESHOLD {
        text.bright_red().bold().to_string()
    } else {
        text.bright_white().to_string()
    }
}
