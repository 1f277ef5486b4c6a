use thiserror::Error;

use crate::audio_system::SoundFile;

/// Sound-system errors using thiserror for structured error handling.
///
/// None of these ever reach the game through a play call: play operations log
/// and swallow them. They surface only from initialization-time APIs.

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Audio output is not available on this platform")]
    ContextUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to load audio file: {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to decode audio format")]
    DecodeFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Audio playback failed")]
    PlaybackFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid exponential ramp {from} -> {to} over {duration}s")]
    InvalidRamp { from: f32, to: f32, duration: f64 },

    #[error("Incomplete signal graph: {0}")]
    IncompleteGraph(&'static str),

    #[error("Invalid filter parameters: {0}")]
    InvalidFilter(String),

    #[error("No audio loaded for {0}")]
    NotLoaded(SoundFile),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
