//! Cancellable countdown and boot timers
//!
//! The service owns at most one tokio task at a time. Instead of invoking a
//! callback, the task sends `TimerSignal`s over a channel owned by the
//! session, tagged with the generation they were scheduled for.

use super::state::Generation;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// Message sent from a timer task to its session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    /// The boot delay for this generation elapsed
    BootComplete(Generation),
    /// One countdown period elapsed
    Tick(Generation),
}

impl TimerSignal {
    /// Generation the signal was scheduled for
    #[must_use]
    pub const fn generation(self) -> Generation {
        match self {
            Self::BootComplete(generation) | Self::Tick(generation) => generation,
        }
    }
}

/// Schedules boot and tick signals for a single session
pub struct TimerService {
    signals: UnboundedSender<TimerSignal>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl TimerService {
    /// Create a stopped service that will deliver to `signals`
    #[must_use]
    pub const fn new(signals: UnboundedSender<TimerSignal>, period: Duration) -> Self {
        Self {
            signals,
            period,
            task: None,
        }
    }

    /// Begin sending `Tick(generation)` once per period
    ///
    /// The first tick arrives one full period after this call. Any task
    /// already scheduled is cancelled first.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn start_ticking(&mut self, generation: Generation) {
        self.stop();

        let signals = self.signals.clone();
        let period = self.period;
        debug!(%generation, ?period, "countdown started");

        self.task = Some(tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;
                if signals.send(TimerSignal::Tick(generation)).is_err() {
                    break;
                }
            }
        }));
    }

    /// Send a single `BootComplete(generation)` after `delay`
    ///
    /// Shares the task slot with the countdown, so it also cancels any
    /// running schedule.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn schedule_boot(&mut self, generation: Generation, delay: Duration) {
        self.stop();

        let signals = self.signals.clone();
        debug!(%generation, ?delay, "boot scheduled");

        self.task = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = signals.send(TimerSignal::BootComplete(generation));
        }));
    }

    /// Cancel any scheduled task; stopping a stopped service is a no-op
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            trace!("timer task aborted");
        }
    }

    /// Check if a task is scheduled and has not finished
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TimerService {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn service() -> (TimerService, mpsc::UnboundedReceiver<TimerSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (TimerService::new(tx, Duration::from_secs(1)), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (mut timer, mut rx) = service();
        let generation = Generation::default().next();
        let started = Instant::now();

        timer.start_ticking(generation);

        for n in 1..=3 {
            assert_eq!(rx.recv().await, Some(TimerSignal::Tick(generation)));
            assert_eq!(started.elapsed(), Duration::from_secs(n));
        }
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn boot_fires_once_after_delay() {
        let (mut timer, mut rx) = service();
        let generation = Generation::default();
        let started = Instant::now();

        timer.schedule_boot(generation, Duration::from_secs(7));

        assert_eq!(
            rx.recv().await,
            Some(TimerSignal::BootComplete(generation))
        );
        assert_eq!(started.elapsed(), Duration::from_secs(7));

        tokio::task::yield_now().await;
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_pending_ticks() {
        let (mut timer, mut rx) = service();
        timer.start_ticking(Generation::default());

        timer.stop();
        assert!(!timer.is_running());

        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent() {
        let (mut timer, _rx) = service();
        timer.stop();
        timer.start_ticking(Generation::default());
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_previous_schedule() {
        let (mut timer, mut rx) = service();
        let old = Generation::default();
        let new = old.next();

        timer.start_ticking(old);
        timer.start_ticking(new);

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(TimerSignal::Tick(new)));
        }
    }
}
