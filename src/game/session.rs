//! Game session state machine
//!
//! `GameSession` owns the secret, the counters, the feedback history and the
//! timer. All mutation goes through `&mut self` command methods, so each
//! transition runs to completion before the next one is observed.
//!
//! # Lifecycle
//! ```text
//! start()/reset() ──► Booting ──(boot delay)──► Active ──► Won
//!                                                  │
//!                                                  └────► Lost
//! ```

use super::config::{GameConfig, MAX_ATTEMPTS, ROUND_SECONDS, TICK_PERIOD};
use super::error::GameError;
use super::event::GameEvent;
use super::state::{GameState, Generation, LossCause, Outcome, Snapshot};
use super::timer::{TimerService, TimerSignal};
use crate::core::{Code, FeedbackRow, RandomSecret, SecretGenerator};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, instrument, trace};

/// Events buffered per subscriber before it starts lagging
const EVENT_CAPACITY: usize = 64;

/// One player's game, from boot to outcome, across any number of resets
pub struct GameSession<G: SecretGenerator = RandomSecret> {
    config: GameConfig,
    generator: G,
    secret: Code,
    state: GameState,
    attempts_used: u8,
    remaining_seconds: u32,
    history: Vec<FeedbackRow>,
    outcome: Option<Outcome>,
    generation: Generation,
    timer: TimerService,
    signals: mpsc::UnboundedReceiver<TimerSignal>,
    events: broadcast::Sender<GameEvent>,
}

impl GameSession<RandomSecret> {
    /// Create a session with OS-seeded random secrets
    #[must_use]
    pub fn with_random_secrets(config: GameConfig) -> Self {
        Self::new(config, RandomSecret::new())
    }
}

impl<G: SecretGenerator> GameSession<G> {
    /// Create a session in `Booting`, holding a first secret
    ///
    /// No timer is scheduled until `start()` is called.
    pub fn new(config: GameConfig, mut generator: G) -> Self {
        let (signal_tx, signals) = mpsc::unbounded_channel();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let secret = generator.generate();

        Self {
            config,
            generator,
            secret,
            state: GameState::Booting,
            attempts_used: 0,
            remaining_seconds: ROUND_SECONDS,
            history: Vec::with_capacity(usize::from(MAX_ATTEMPTS)),
            outcome: None,
            generation: Generation::default(),
            timer: TimerService::new(signal_tx, TICK_PERIOD),
            signals,
            events,
        }
    }

    /// Enter `Booting` with a fresh secret and cleared counters
    ///
    /// Cancels the previous timer before anything of the new generation is
    /// created. Becomes `Active` once the boot delay has elapsed, or
    /// immediately when the delay is zero.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    #[instrument(skip(self), fields(previous = %self.generation))]
    pub fn start(&mut self) {
        self.timer.stop();

        self.generation = self.generation.next();
        self.secret = self.generator.generate();
        self.state = GameState::Booting;
        self.attempts_used = 0;
        self.remaining_seconds = ROUND_SECONDS;
        self.history.clear();
        self.outcome = None;

        info!(generation = %self.generation, "session booting");
        trace!(secret = %self.secret, "secret generated");
        self.emit(GameEvent::Booting(self.snapshot()));

        if self.config.boot_delay.is_zero() {
            self.finish_boot();
        } else {
            self.timer
                .schedule_boot(self.generation, self.config.boot_delay);
        }
    }

    /// Discard the current game and boot a new one
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn reset(&mut self) {
        debug!(generation = %self.generation, state = %self.state, "reset requested");
        self.start();
    }

    /// Parse and score a guess typed by the player
    ///
    /// # Errors
    /// Returns `GameError::IllegalState` unless the session is `Active`, and
    /// `GameError::InvalidGuess` if the input is not four digits. Neither
    /// changes the session.
    pub fn submit_guess(&mut self, input: &str) -> Result<FeedbackRow, GameError> {
        self.ensure_active()?;
        let guess = Code::parse(input)?;
        self.submit(guess)
    }

    /// Score an already parsed guess
    ///
    /// # Errors
    /// Returns `GameError::IllegalState` unless the session is `Active`.
    #[instrument(skip(self), fields(generation = %self.generation, attempt = self.attempts_used + 1))]
    pub fn submit(&mut self, guess: Code) -> Result<FeedbackRow, GameError> {
        self.ensure_active()?;

        let row = FeedbackRow::calculate(&guess, &self.secret);
        self.attempts_used += 1;
        self.history.push(row);
        debug!(%guess, feedback = %row, "guess scored");

        self.emit(GameEvent::GuessScored {
            guess,
            row,
            snapshot: self.snapshot(),
        });

        if guess == self.secret {
            self.finish(Outcome::Won);
        } else if self.attempts_used >= MAX_ATTEMPTS {
            self.finish(Outcome::Lost(LossCause::AttemptsExhausted));
        }

        Ok(row)
    }

    /// Advance the countdown by one second
    ///
    /// Ignored unless the session is `Active`.
    pub fn tick(&mut self) {
        if self.state != GameState::Active {
            trace!(state = %self.state, "tick ignored");
            return;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.emit(GameEvent::Ticked(self.snapshot()));

        if self.remaining_seconds == 0 {
            self.finish(Outcome::Lost(LossCause::TimeExpired));
        }
    }

    /// Apply a signal from the timer, dropping it if it belongs to an
    /// earlier generation
    pub fn handle_signal(&mut self, signal: TimerSignal) {
        if signal.generation() != self.generation {
            debug!(
                stale = %signal.generation(),
                current = %self.generation,
                "dropping stale timer signal"
            );
            return;
        }

        match signal {
            TimerSignal::BootComplete(_) => self.finish_boot(),
            TimerSignal::Tick(_) => self.tick(),
        }
    }

    /// Wait for the next timer signal
    ///
    /// Never resolves while the timer is stopped. Cancel-safe, so it can sit
    /// in a `tokio::select!` next to player input.
    pub async fn next_signal(&mut self) -> Option<TimerSignal> {
        self.signals.recv().await
    }

    /// Take a signal that is already queued, without waiting
    pub fn try_next_signal(&mut self) -> Option<TimerSignal> {
        self.signals.try_recv().ok()
    }

    /// Subscribe to transition events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Current view of the session
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            state: self.state,
            attempts_used: self.attempts_used,
            remaining_seconds: self.remaining_seconds,
            history: self.history.clone(),
            outcome: self.outcome,
            secret: self.state.is_terminal().then_some(self.secret),
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub fn history(&self) -> &[FeedbackRow] {
        &self.history
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Check if a boot or countdown task is scheduled
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.state == GameState::Active {
            Ok(())
        } else {
            Err(GameError::IllegalState { state: self.state })
        }
    }

    fn finish_boot(&mut self) {
        if self.state != GameState::Booting {
            return;
        }

        self.state = GameState::Active;
        self.timer.start_ticking(self.generation);
        info!(generation = %self.generation, "session active");
        self.emit(GameEvent::Activated(self.snapshot()));
    }

    fn finish(&mut self, outcome: Outcome) {
        self.timer.stop();
        self.state = outcome.state();
        self.outcome = Some(outcome);

        info!(
            generation = %self.generation,
            ?outcome,
            attempts = self.attempts_used,
            remaining = self.remaining_seconds,
            "session finished"
        );
        self.emit(GameEvent::Finished(self.snapshot()));
    }

    fn emit(&self, event: GameEvent) {
        // No subscribers is fine; the snapshot stays pollable
        let _ = self.events.send(event);
    }
}
