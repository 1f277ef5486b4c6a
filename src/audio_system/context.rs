/// Shared audio context
///
/// The context is the connection to the output mixer. It is created at most
/// once, lazily, and lives as long as its owner. A context that starts
/// suspended is resumed by the first pointer or touch gesture seen on the
/// interaction bus.
use std::cell::{OnceCell, RefCell};
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

use super::graph::ScheduledGraph;
use crate::error::AudioError;
use crate::messaging::{InteractionBus, InteractionEvent, SubscriberId};

/// Whether the context is currently rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Suspended,
    Running,
}

/// Host audio-processing capability
///
/// Implementations own the output and render scheduled graphs on their own.
/// Times are seconds on the context clock.
pub trait AudioContext {
    /// Current context time
    fn current_time(&self) -> f64;

    fn state(&self) -> ContextState;

    /// Start rendering; a no-op when already running
    fn resume(&self) -> Result<(), AudioError>;

    /// Hand a graph to the renderer; it plays from `start` to `stop` and is
    /// then dropped
    fn schedule(&self, graph: ScheduledGraph) -> Result<(), AudioError>;
}

/// Context clock that only advances while running
#[derive(Debug, Clone, Copy)]
pub struct ContextClock {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl ContextClock {
    pub fn suspended() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    pub fn running(now: Instant) -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: Some(now),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub fn suspend(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    pub fn seconds_at(&self, now: Instant) -> f64 {
        let running = self
            .running_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default();
        (self.accumulated + running).as_secs_f64()
    }
}

/// One-shot listener waiting for an unlocking gesture
struct UnlockListener {
    id: SubscriberId,
    events: Receiver<InteractionEvent>,
}

type ContextFactory<C> = Box<dyn Fn() -> Result<C, AudioError>>;

/// Lazily-created context with idempotent init and resume
///
/// Thread-confined: the context is created, used and resumed on the thread
/// that owns this value.
pub struct SharedContext<C: AudioContext> {
    factory: ContextFactory<C>,
    slot: OnceCell<Option<C>>,
    bus: Option<InteractionBus>,
    unlock: RefCell<Option<UnlockListener>>,
}

impl<C: AudioContext> SharedContext<C> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<C, AudioError> + 'static,
    {
        Self {
            factory: Box::new(factory),
            slot: OnceCell::new(),
            bus: None,
            unlock: RefCell::new(None),
        }
    }

    /// Listen on `bus` for the gesture that unlocks a suspended context
    pub fn with_interaction_bus(mut self, bus: InteractionBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Create the context on first call; later calls return the cached outcome
    ///
    /// Returns false if the platform has no usable audio output.
    pub fn ensure_ready(&self) -> bool {
        self.slot.get_or_init(|| self.create()).is_some()
    }

    fn create(&self) -> Option<C> {
        let context = match (self.factory)() {
            Ok(context) => context,
            Err(e) => {
                tracing::warn!("Audio is not supported on this system, using silent mode: {}", e);
                return None;
            }
        };

        if context.state() == ContextState::Suspended {
            match &self.bus {
                Some(bus) => {
                    let (events, id) = bus.subscribe();
                    *self.unlock.borrow_mut() = Some(UnlockListener { id, events });
                    tracing::debug!("Audio context suspended, waiting for a click or touch");
                }
                None => {
                    tracing::warn!("Audio context suspended and no interaction source attached");
                }
            }
        }

        tracing::info!("Audio context initialized successfully");
        Some(context)
    }

    /// Whether `ensure_ready` ran and failed
    pub fn is_unavailable(&self) -> bool {
        matches!(self.slot.get(), Some(None))
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The context, if it was created successfully
    ///
    /// Pending interaction events are handled first, so a gesture published
    /// before this call resumes the context before anything is scheduled.
    pub fn get(&self) -> Option<&C> {
        self.poll_unlock();
        self.slot.get().and_then(Option::as_ref)
    }

    /// Drain pending gestures; the first unlocking one resumes the context and
    /// removes the listener
    pub fn poll_unlock(&self) {
        let mut unlock = self.unlock.borrow_mut();
        let Some(listener) = unlock.as_ref() else {
            return;
        };

        let gesture = listener.events.try_iter().find(|event| event.unlocks_audio());
        if gesture.is_none() {
            return;
        }

        if let Some(context) = self.slot.get().and_then(Option::as_ref) {
            match context.resume() {
                Ok(()) => tracing::info!("Audio context resumed after user gesture"),
                Err(e) => tracing::warn!("Failed to resume audio context: {}", e),
            }
        }

        if let Some(listener) = unlock.take() {
            if let Some(bus) = &self.bus {
                bus.unsubscribe(listener.id);
            }
        }
    }

    /// Whether an unlock listener is still registered
    pub fn awaiting_gesture(&self) -> bool {
        self.unlock.borrow().is_some()
    }
}
