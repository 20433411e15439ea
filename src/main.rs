//! Codebreach - CLI
//!
//! Play the timed code-breaking game in a terminal, or score a single guess.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use codebreach::{
    commands::{run_play, score_guess},
    core::RandomSecret,
    game::{DEFAULT_BOOT_MS, GameConfig},
    output::print_score_result,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "codebreach",
    about = "Crack a 4-digit code in 6 attempts before the 60-second clock runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log verbosity: -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Boot sequence length in milliseconds (0 starts the clock immediately)
        #[arg(long, default_value_t = DEFAULT_BOOT_MS)]
        boot_ms: u64,

        /// Seed for a reproducible secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score one guess against a known secret
    Score {
        /// The secret code, e.g. 1234
        secret: String,

        /// The guess to score, e.g. 1324
        guess: String,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise the level comes from `-v` flags and
/// defaults to warnings only so the game output stays clean.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        boot_ms: DEFAULT_BOOT_MS,
        seed: None,
    });

    match command {
        Commands::Play { boot_ms, seed } => run_play_command(boot_ms, seed).await,
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

async fn run_play_command(boot_ms: u64, seed: Option<u64>) -> Result<()> {
    let config = GameConfig::new().with_boot_delay(Duration::from_millis(boot_ms));
    let generator = seed.map_or_else(RandomSecret::new, RandomSecret::seeded);
    run_play(config, generator).await
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
