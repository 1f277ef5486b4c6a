/// Messaging module
///
/// - **Interaction events**: raw gestures from the host, broadcast on the
///   `InteractionBus`; the audio context listens for the first unlocking one.
/// - **Game events**: moves and outcomes that map to a sound cue.
///
/// ```text
/// ┌────────────┐  publish   ┌────────────────┐  try_recv   ┌───────────────┐
/// │ Input      │ ─────────> │ InteractionBus │ ──────────> │ SharedContext │
/// │ (any thread)│           │                │             │ (audio thread)│
/// └────────────┘            └────────────────┘             └───────────────┘
/// ```

pub mod bus;
pub mod events;

// Re-export commonly used types
pub use bus::{InteractionBus, SubscriberId};
pub use events::{GameEvent, InteractionEvent};
