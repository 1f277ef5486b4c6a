use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio_system::{ContextOptions, SoundFile};
use crate::error::ConfigError;

/// Which of the two sound implementations to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundStrategy {
    Synthesized,
    Files,
}

/// Per-clip volumes for file playback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVolumes {
    pub stone_place: f32,
    pub win: f32,
    pub draw: f32,
    pub error: f32,
}

impl FileVolumes {
    pub fn for_file(&self, file: SoundFile) -> f32 {
        match file {
            SoundFile::StonePlace => self.stone_place,
            SoundFile::Win => self.win,
            SoundFile::Draw => self.draw,
            SoundFile::Error => self.error,
        }
    }
}

impl Default for FileVolumes {
    fn default() -> Self {
        Self {
            stone_place: 0.7,
            win: 0.8,
            draw: 0.7,
            error: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Synthesized tones or preloaded clips
    pub strategy: SoundStrategy,

    /// Directory holding stone_place.mp3, win.mp3, draw.mp3 and error.mp3
    pub sounds_dir: String,

    pub volumes: FileVolumes,

    /// Use the filtered stone sound for stone placement
    pub enhanced_stone: bool,

    /// Keep audio suspended until the first click or touch
    pub require_user_gesture: bool,

    /// Output sample rate for synthesized audio
    pub sample_rate: u32,

    /// Default log filter when RUST_LOG is not set
    pub log_level: String,

    /// Also write daily-rotated log files
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: SoundStrategy::Synthesized,
            sounds_dir: "static/sounds".to_string(),
            volumes: FileVolumes::default(),
            enhanced_stone: false,
            require_user_gesture: false,
            sample_rate: 44_100,
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Falls back to defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let config = Self::load_from(&config_path)?;
            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            tracing::debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Ok(Config::default())
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let load_failed = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source,
        };

        let content = fs::read_to_string(path).map_err(|e| load_failed(Box::new(e)))?;
        let config: Config = serde_json::from_str(&content).map_err(|e| load_failed(Box::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let save_failed = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(|e| save_failed(Box::new(e)))?;
        fs::write(path, json).map_err(|e| save_failed(Box::new(e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for file in SoundFile::ALL {
            let volume = self.volumes.for_file(file);
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::Invalid(format!(
                    "volume for {} must be between 0 and 1, got {}",
                    file, volume
                )));
            }
        }
        if self.sample_rate == 0 {
            return Err(ConfigError::Invalid("sample_rate must be positive".to_string()));
        }
        Ok(())
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::app_dir().join("config.json")
    }

    /// Per-user application directory
    pub fn app_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("GomokuSounds"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn context_options(&self) -> ContextOptions {
        ContextOptions {
            sample_rate: self.sample_rate,
            start_suspended: self.require_user_gesture,
        }
    }
}
