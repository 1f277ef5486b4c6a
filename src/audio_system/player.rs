/// File-based sound player
///
/// Preloads the four clips into memory with their fixed volumes and plays
/// them fire-and-forget. Overlapping plays are left to the output.
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use super::source::SoundFile;
use super::volume::Volume;
use crate::config::FileVolumes;
use crate::error::AudioError;

/// Encoded clip bytes shared between preload and every playback
#[derive(Debug, Clone)]
pub struct ClipData(Arc<Vec<u8>>);

impl ClipData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Arc::new(bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the whole clip once to make sure playback will not fail on format
    pub fn verify(&self) -> Result<(), AudioError> {
        let decoder = Decoder::new(Cursor::new(self.clone()))
            .map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;
        let _sample_count = decoder.count();
        Ok(())
    }
}

impl AsRef<[u8]> for ClipData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Host clip player
pub trait ClipOutput {
    fn play_clip(&self, clip: &ClipData, volume: Volume) -> Result<(), AudioError>;
}

/// Clip output on the default device
pub struct RodioOutput {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

impl RodioOutput {
    pub fn try_default() -> Result<Self, AudioError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::ContextUnavailable(Box::new(e)))?;
        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }
}

impl ClipOutput for RodioOutput {
    fn play_clip(&self, clip: &ClipData, volume: Volume) -> Result<(), AudioError> {
        let decoder = Decoder::new(Cursor::new(clip.clone()))
            .map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;
        let source = decoder.convert_samples::<f32>().amplify(volume.level());
        self.stream_handle
            .play_raw(source)
            .map_err(|e| AudioError::PlaybackFailed(Box::new(e)))
    }
}

struct PreloadedSound {
    clip: ClipData,
    volume: Volume,
}

pub struct FilePlayer<O: ClipOutput> {
    output: O,
    sounds: HashMap<SoundFile, PreloadedSound>,
}

impl FilePlayer<RodioOutput> {
    /// Player on the default output device
    pub fn try_default() -> Result<Self, AudioError> {
        Ok(Self::new(RodioOutput::try_default()?))
    }
}

impl<O: ClipOutput> FilePlayer<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            sounds: HashMap::new(),
        }
    }

    /// Preload every clip from `dir` with its configured volume
    ///
    /// A clip that is missing or cannot be decoded is logged and left
    /// unloaded; playing it later is a no-op.
    pub fn init_sounds(&mut self, dir: &Path, volumes: &FileVolumes) {
        for file in SoundFile::ALL {
            let path = dir.join(file.file_name());
            let volume = Volume::new(volumes.for_file(file));

            match load_clip(&path) {
                Ok(clip) => {
                    tracing::info!(
                        "Preloaded {} sound: {} ({} bytes, volume {})",
                        file,
                        path.display(),
                        clip.len(),
                        volume.level()
                    );
                    self.sounds.insert(file, PreloadedSound { clip, volume });
                }
                Err(e) => {
                    tracing::warn!("Could not preload {} sound: {}", file, e);
                }
            }
        }
    }

    /// Preload a clip from memory
    pub fn load_from_memory(
        &mut self,
        file: SoundFile,
        bytes: Vec<u8>,
        volume: f32,
    ) -> Result<(), AudioError> {
        let clip = ClipData::new(bytes);
        clip.verify()?;
        self.sounds.insert(
            file,
            PreloadedSound {
                clip,
                volume: Volume::new(volume),
            },
        );
        tracing::debug!("Sound ready for {}", file);
        Ok(())
    }

    /// Play a preloaded clip; failures are logged and swallowed
    pub fn play_sound(&self, file: SoundFile) {
        if let Err(e) = self.try_play(file) {
            tracing::warn!("Sound playback error: {}", e);
        }
    }

    fn try_play(&self, file: SoundFile) -> Result<(), AudioError> {
        let sound = self.sounds.get(&file).ok_or(AudioError::NotLoaded(file))?;
        self.output.play_clip(&sound.clip, sound.volume)
    }

    pub fn is_loaded(&self, file: SoundFile) -> bool {
        self.sounds.contains_key(&file)
    }

    pub fn volume(&self, file: SoundFile) -> Option<Volume> {
        self.sounds.get(&file).map(|sound| sound.volume)
    }

    /// Get number of loaded clips
    pub fn loaded_count(&self) -> usize {
        self.sounds.len()
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}

fn load_clip(path: &Path) -> Result<ClipData, AudioError> {
    let bytes = std::fs::read(path).map_err(|e| AudioError::LoadFailed {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;
    let clip = ClipData::new(bytes);
    clip.verify().map_err(|e| AudioError::LoadFailed {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;
    Ok(clip)
}
