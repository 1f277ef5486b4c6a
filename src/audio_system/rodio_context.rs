/// Audio context backed by rodio
///
/// Every voice is added to one dynamic mixer, which plays through a single
/// sink. Pausing that sink is what "suspended" means here.
use std::cell::Cell;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rodio::dynamic_mixer::{self, DynamicMixerController};
use rodio::source::Zero;
use rodio::{OutputStream, Sink, Source};

use super::context::{AudioContext, ContextClock, ContextState};
use super::graph::ScheduledGraph;
use super::render::VoiceSource;
use crate::error::AudioError;

const OUTPUT_CHANNELS: u16 = 2;

/// Options for opening the output
#[derive(Debug, Clone, Copy)]
pub struct ContextOptions {
    pub sample_rate: u32,

    /// Hold output until a user gesture resumes the context
    pub start_suspended: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            start_suspended: false,
        }
    }
}

/// Context rendering to the default output device
pub struct RodioContext {
    _stream: OutputStream,
    sink: Sink,
    mixer: Arc<DynamicMixerController<f32>>,
    sample_rate: u32,
    clock: Cell<ContextClock>,
}

impl RodioContext {
    /// Open the default output device
    pub fn try_new(options: ContextOptions) -> Result<Self, AudioError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::ContextUnavailable(Box::new(e)))?;
        let sink = Sink::try_new(&stream_handle)
            .map_err(|e| AudioError::ContextUnavailable(Box::new(e)))?;

        let (mixer, output) = dynamic_mixer::mixer::<f32>(OUTPUT_CHANNELS, options.sample_rate);
        // The mixer ends once it runs out of inputs; keep one silent input forever
        mixer.add(Zero::<f32>::new(OUTPUT_CHANNELS, options.sample_rate));

        let now = Instant::now();
        let clock = if options.start_suspended {
            sink.pause();
            ContextClock::suspended()
        } else {
            ContextClock::running(now)
        };
        sink.append(output);

        tracing::debug!(
            "Opened audio output: {} Hz, {} channels, {}",
            options.sample_rate,
            OUTPUT_CHANNELS,
            if options.start_suspended { "suspended" } else { "running" }
        );

        Ok(Self {
            _stream: stream,
            sink,
            mixer,
            sample_rate: options.sample_rate,
            clock: Cell::new(clock),
        })
    }

    pub fn try_default() -> Result<Self, AudioError> {
        Self::try_new(ContextOptions::default())
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl AudioContext for RodioContext {
    fn current_time(&self) -> f64 {
        self.clock.get().seconds_at(Instant::now())
    }

    fn state(&self) -> ContextState {
        if self.clock.get().is_running() {
            ContextState::Running
        } else {
            ContextState::Suspended
        }
    }

    fn resume(&self) -> Result<(), AudioError> {
        let mut clock = self.clock.get();
        if clock.is_running() {
            return Ok(());
        }
        clock.resume(Instant::now());
        self.clock.set(clock);
        self.sink.play();
        Ok(())
    }

    fn schedule(&self, scheduled: ScheduledGraph) -> Result<(), AudioError> {
        let delay = (scheduled.start - self.current_time()).max(0.0);
        tracing::trace!(
            "Scheduling {:?} voice in {:.3}s for {:.3}s",
            scheduled.graph.waveform,
            delay,
            scheduled.graph.duration
        );

        let voice = VoiceSource::new(scheduled.graph, self.sample_rate)?;

        self.mixer.add(voice.delay(Duration::from_secs_f64(delay)));
        Ok(())
    }
}
