//! Console view for the interactive game
//!
//! Draws `GameEvent`s as plain lines. Holds no game state of its own apart
//! from the boot spinner.

use super::formatters::{colored_guess, format_attempts, format_clock, should_announce, time_bar};
use crate::commands::ScoreResult;
use crate::game::{GameError, GameEvent, LossCause, Outcome, Snapshot};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_WIDTH: usize = 20;

/// Line-based renderer for session events
#[derive(Default)]
pub struct Console {
    boot_spinner: Option<ProgressBar>,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one session event
    pub fn render(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Booting(_) => self.start_boot(),
            GameEvent::Activated(snapshot) => {
                self.finish_boot();
                println!(
                    "\n{}",
                    "Terminal online. Crack the 4-digit code.".bright_green()
                );
                print_status(snapshot);
            }
            GameEvent::Ticked(snapshot) => {
                if should_announce(snapshot.remaining_seconds) {
                    print_status(snapshot);
                }
            }
            GameEvent::GuessScored {
                guess,
                row,
                snapshot,
            } => {
                println!(
                    "  {}. {}   {}   {}",
                    snapshot.attempts_used.to_string().bright_black(),
                    colored_guess(guess, row),
                    row.to_emoji(),
                    format_attempts(snapshot.attempts_used).bright_black()
                );
            }
            GameEvent::Finished(snapshot) => {
                self.finish_boot();
                print_outcome(snapshot);
            }
        }
    }

    /// Tell the player why their input was not accepted
    pub fn reject(&self, error: &GameError) {
        match error {
            GameError::InvalidGuess(_) => {
                println!("{}", "  ✗ Enter exactly 4 digits (0-9).".red());
            }
            GameError::IllegalState { state } => {
                println!(
                    "{}",
                    format!("  ✗ No guesses while the session is {state}. Type 'r' to reboot.")
                        .red()
                );
            }
        }
    }

    /// Print the opening banner
    pub fn print_banner(&self) {
        println!("\n{}", "═".repeat(60).bright_green());
        println!(
            "{}",
            "          C O D E B R E A C H   //   4 DIGITS · 6 TRIES · 60s"
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(60).bright_green());
        self.print_help();
    }

    /// Print the input reference
    pub fn print_help(&self) {
        println!(
            "\n  Type a 4-digit guess and press Enter. {} exact, {} elsewhere in the code, {} not in the code.",
            "green".bright_green(),
            "yellow".bright_yellow(),
            "red".bright_red()
        );
        println!("  Commands: 'r' to reboot, 'q' to quit, '?' for help\n");
    }

    /// Print the closing line
    pub fn goodbye(&mut self) {
        self.finish_boot();
        println!("\n{}\n", "Connection closed.".bright_black());
    }

    fn start_boot(&mut self) {
        self.finish_boot();

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message("Booting breach sequence...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.boot_spinner = Some(spinner);
    }

    fn finish_boot(&mut self) {
        if let Some(spinner) = self.boot_spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn print_status(snapshot: &Snapshot) {
    let bar = time_bar(snapshot.remaining_seconds, BAR_WIDTH);
    let bar = if snapshot.is_time_low() {
        bar.red()
    } else {
        bar.green()
    };
    println!(
        "  [{bar}] {}   attempts {}",
        format_clock(snapshot.remaining_seconds),
        format_attempts(snapshot.attempts_used)
    );
}

fn print_outcome(snapshot: &Snapshot) {
    let Some(outcome) = snapshot.outcome else {
        return;
    };

    println!();
    match outcome {
        Outcome::Won => {
            println!("{}", "═".repeat(60).bright_green());
            println!("{}", "              ✓  ACCESS GRANTED".bright_green().bold());
            println!("{}", "═".repeat(60).bright_green());
            println!(
                "  Cracked in {} with {} left.",
                format_attempts(snapshot.attempts_used).bright_cyan(),
                format!("{}s", snapshot.remaining_seconds).bright_cyan()
            );
        }
        Outcome::Lost(cause) => {
            println!("{}", "═".repeat(60).bright_red());
            println!("{}", "              ✗  ACCESS DENIED".bright_red().bold());
            println!("{}", "═".repeat(60).bright_red());
            let reason = match cause {
                LossCause::AttemptsExhausted => "Out of attempts.",
                LossCause::TimeExpired => "Time expired.",
            };
            println!("  {reason}");
        }
    }

    if let Some(secret) = snapshot.secret {
        println!("  The code was {}.", secret.to_string().bright_white().bold());
    }
    println!("  Type 'r' to reboot or 'q' to quit.\n");
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n  secret {}   guess {}   {}",
        result.secret.to_string().bright_white().bold(),
        colored_guess(&result.guess, &result.row),
        result.row.to_emoji()
    );
    println!(
        "  exact: {}   present: {}",
        result.row.count_exact().to_string().bright_green(),
        result.row.count_present().to_string().bright_yellow()
    );
}
