//! Drives a `StepSequencer` in real time.
//!
//! The sequencer decides *whether* an advance happens; this module owns *when*.
//! At most one `ScheduledAdvance` is alive per player, and dropping it (on
//! replay, reset, or when the player goes away) cancels the pending advance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use course_core::simulation::{ADVANCE_DELAY, ArmToken, SequencerSnapshot, StepSequencer};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

struct Shared {
    sequencer: Mutex<StepSequencer>,
    updates: watch::Sender<SequencerSnapshot>,
}

impl Shared {
    fn sequencer(&self) -> MutexGuard<'_, StepSequencer> {
        self.sequencer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, snapshot: SequencerSnapshot) {
        self.updates.send_replace(snapshot);
    }
}

/// Handle to the background task performing delayed advances.
///
/// The task is aborted on drop.
#[derive(Debug)]
pub struct ScheduledAdvance {
    handle: JoinHandle<()>,
}

impl ScheduledAdvance {
    fn arm(shared: Arc<Shared>, token: ArmToken, delay: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut token = token;
            loop {
                tokio::time::sleep(delay).await;
                let (next, snapshot) = {
                    let mut sequencer = shared.sequencer();
                    let next = sequencer.fire(token);
                    (next, sequencer.snapshot())
                };
                shared.publish(snapshot);
                match next {
                    Some(next) => token = next,
                    None => break,
                }
            }
        });
        Self { handle }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Auto-advancing attack walkthrough.
///
/// `play` and `reset` must be called from within a Tokio runtime; `play`
/// spawns the timer task.
pub struct SimulationPlayer {
    shared: Arc<Shared>,
    delay: Duration,
    pending: Mutex<Option<ScheduledAdvance>>,
}

impl SimulationPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(ADVANCE_DELAY)
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        let sequencer = StepSequencer::new();
        let (updates, _) = watch::channel(sequencer.snapshot());
        Self {
            shared: Arc::new(Shared {
                sequencer: Mutex::new(sequencer),
                updates,
            }),
            delay,
            pending: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn snapshot(&self) -> SequencerSnapshot {
        self.shared.sequencer().snapshot()
    }

    /// Receiver that observes every stage change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SequencerSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Whether a delayed advance is still outstanding.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|scheduled| !scheduled.is_finished())
    }

    /// Start over from stage 0 and schedule the first advance.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn play(&self) {
        let mut pending = self.pending();
        pending.take();

        let (token, snapshot) = {
            let mut sequencer = self.shared.sequencer();
            let token = sequencer.play();
            (token, sequencer.snapshot())
        };
        self.shared.publish(snapshot);

        *pending = Some(ScheduledAdvance::arm(
            Arc::clone(&self.shared),
            token,
            self.delay,
        ));
        debug!(delay_ms = self.delay.as_millis(), "simulation armed");
    }

    /// Stop and go back to stage 0, cancelling any pending advance.
    pub fn reset(&self) {
        let mut pending = self.pending();
        pending.take();

        let snapshot = {
            let mut sequencer = self.shared.sequencer();
            sequencer.reset();
            sequencer.snapshot()
        };
        self.shared.publish(snapshot);
    }

    fn pending(&self) -> MutexGuard<'_, Option<ScheduledAdvance>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SimulationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimulationPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationPlayer")
            .field("snapshot", &self.snapshot())
            .field("delay", &self.delay)
            .field("armed", &self.is_armed())
            .finish()
    }
}
