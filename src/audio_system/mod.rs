/// Audio system module
///
/// Two independent ways to voice game events:
/// - `SynthPlayer`: synthesizes every cue on a lazily-created shared context
/// - `FilePlayer`: plays four preloaded clips at fixed volumes
///
/// ## Architecture
///
/// ```text
/// SynthPlayer
///   └── SharedContext (created once, resumed by first click/touch)
///         └── AudioContext (RodioContext)
///               └── mixer  <── VoiceSource per scheduled graph
///
/// Each play call:
///   SoundEffect ──voices()──> SignalGraph(s)
///     oscillator ─> [low-pass] ─> gain ─> mixer
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let bus = InteractionBus::new();
/// let player = SynthPlayer::new(RodioContext::try_default).with_interaction_bus(bus.clone());
/// player.ensure_ready();
///
/// player.play_stone();
/// player.play_win(); // four back-to-back notes
/// ```

pub mod board;
pub mod context;
pub mod descriptor;
pub mod graph;
pub mod player;
pub mod render;
pub mod rodio_context;
pub mod source;
pub mod synth;
pub mod volume;

// Re-export commonly used types
pub use board::SoundBoard;
pub use context::{AudioContext, ContextClock, ContextState, SharedContext};
pub use descriptor::{Voice, ERROR_PEAK_GAIN, TONE_PEAK_GAIN, WIN_ARPEGGIO_HZ, WIN_NOTE_DURATION};
pub use graph::{ParamCurve, ScheduledGraph, SignalGraph, Waveform, GAIN_FLOOR};
pub use player::{ClipData, ClipOutput, FilePlayer, RodioOutput};
pub use rodio_context::{ContextOptions, RodioContext};
pub use source::{SoundEffect, SoundFile};
pub use synth::SynthPlayer;
pub use volume::Volume;
