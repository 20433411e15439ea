//! Interactive play mode
//!
//! Runs one `GameSession` on the current task, feeding it lines from stdin
//! and timer signals, and draws every event it broadcasts.

use crate::core::SecretGenerator;
use crate::game::{GameConfig, GameEvent, GameSession};
use crate::output::Console;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Guess(String),
    Reset,
    Help,
    Quit,
}

/// Interpret one line of input
///
/// Returns `None` for a blank line. Anything that is not a command is passed
/// on as a guess so the session can validate it.
#[must_use]
pub fn parse_action(line: &str) -> Option<PlayerAction> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let action = match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => PlayerAction::Quit,
        "r" | "reset" | "new" | "reboot" => PlayerAction::Reset,
        "?" | "h" | "help" => PlayerAction::Help,
        _ => PlayerAction::Guess(trimmed.to_string()),
    };
    Some(action)
}

/// Run the interactive game until the player quits or stdin closes
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub async fn run_play<G: SecretGenerator>(config: GameConfig, generator: G) -> Result<()> {
    let mut session = GameSession::new(config, generator);
    let mut events = session.subscribe();
    let mut console = Console::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    console.print_banner();
    session.start();

    loop {
        drain_events(&mut events, &mut console);

        tokio::select! {
            Some(signal) = session.next_signal() => session.handle_signal(signal),
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read player input")? else {
                    info!("stdin closed");
                    break;
                };

                match parse_action(&line) {
                    None => {}
                    Some(PlayerAction::Quit) => break,
                    Some(PlayerAction::Reset) => session.reset(),
                    Some(PlayerAction::Help) => console.print_help(),
                    Some(PlayerAction::Guess(input)) => {
                        if let Err(err) = session.submit_guess(&input) {
                            console.reject(&err);
                        }
                    }
                }
            }
        }
    }

    drain_events(&mut events, &mut console);
    console.goodbye();
    Ok(())
}

fn drain_events(events: &mut broadcast::Receiver<GameEvent>, console: &mut Console) {
    loop {
        match events.try_recv() {
            Ok(event) => console.render(&event),
            Err(TryRecvError::Lagged(skipped)) => warn!(skipped, "console fell behind"),
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_action(""), None);
        assert_eq!(parse_action("   \n"), None);
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_action("Q"), Some(PlayerAction::Quit));
        assert_eq!(parse_action("exit"), Some(PlayerAction::Quit));
        assert_eq!(parse_action("R"), Some(PlayerAction::Reset));
        assert_eq!(parse_action("new"), Some(PlayerAction::Reset));
        assert_eq!(parse_action("?"), Some(PlayerAction::Help));
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(
            parse_action(" 0427 "),
            Some(PlayerAction::Guess("0427".to_string()))
        );
        // Validation is left to the session
        assert_eq!(
            parse_action("12a4"),
            Some(PlayerAction::Guess("12a4".to_string()))
        );
    }
}
