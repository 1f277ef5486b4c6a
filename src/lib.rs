//! Sound effects for a gomoku board game.
//!
//! Stone placement, win, draw and invalid-move cues, either synthesized on the
//! fly or played from preloaded clips. Audio failures are logged and never
//! interrupt the game.

pub mod audio_system;
pub mod config;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod sounds;

pub use audio_system::{FilePlayer, SoundBoard, SoundEffect, SoundFile, SynthPlayer};
pub use config::{Config, SoundStrategy};
pub use error::{AudioError, ConfigError};
pub use messaging::{GameEvent, InteractionBus, InteractionEvent};
