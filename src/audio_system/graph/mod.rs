/// Signal graphs
///
/// A graph is one oscillator, an optional low-pass filter and a gain stage,
/// wired oscillator -> filter -> gain -> destination. Graphs are built fresh
/// for every play call and dropped once their stop time has passed.

pub mod filter;
pub mod oscillator;
pub mod ramp;

pub use filter::{FilterState, LowPassFilter};
pub use oscillator::Waveform;
pub use ramp::{ExponentialRamp, ParamCurve};

use crate::error::AudioError;

/// Lowest gain an envelope decays to; exponential ramps cannot reach zero
pub const GAIN_FLOOR: f32 = 0.01;

/// Parameters of a single ephemeral graph, timed relative to its own start
#[derive(Debug, Clone, PartialEq)]
pub struct SignalGraph {
    pub waveform: Waveform,
    pub frequency: ParamCurve,
    pub filter: Option<LowPassFilter>,
    pub gain: ParamCurve,
    /// Seconds between start and stop
    pub duration: f64,
}

impl SignalGraph {
    pub fn builder(waveform: Waveform) -> GraphBuilder {
        GraphBuilder::new(waveform)
    }
}

/// Builder for `SignalGraph`
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    waveform: Waveform,
    frequency: Option<ParamCurve>,
    filter: Option<LowPassFilter>,
    gain: Option<ParamCurve>,
    duration: Option<f64>,
}

impl GraphBuilder {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            frequency: None,
            filter: None,
            gain: None,
            duration: None,
        }
    }

    /// Hold a fixed frequency
    pub fn with_frequency(mut self, hz: f32) -> Self {
        self.frequency = Some(ParamCurve::Constant(hz));
        self
    }

    /// Glide exponentially from `from` to `to` Hz over `over` seconds
    pub fn with_frequency_ramp(mut self, from: f32, to: f32, over: f64) -> Result<Self, AudioError> {
        self.frequency = Some(ParamCurve::exponential(from, to, over)?);
        Ok(self)
    }

    /// Insert a low-pass stage between oscillator and gain
    pub fn with_low_pass(mut self, cutoff_hz: f32, resonance_db: f32) -> Result<Self, AudioError> {
        self.filter = Some(LowPassFilter::new(cutoff_hz, resonance_db)?);
        Ok(self)
    }

    /// Decay from `peak` to `GAIN_FLOOR` across the full duration
    pub fn with_decay(mut self, peak: f32, duration: f64) -> Result<Self, AudioError> {
        self.gain = Some(ParamCurve::exponential(peak, GAIN_FLOOR, duration)?);
        self.duration = Some(duration);
        Ok(self)
    }

    pub fn build(self) -> Result<SignalGraph, AudioError> {
        let duration = self
            .duration
            .ok_or(AudioError::IncompleteGraph("no gain envelope"))?;
        let gain = self.gain.unwrap_or(ParamCurve::Constant(1.0));
        let frequency = self.frequency.unwrap_or(ParamCurve::Constant(440.0));

        Ok(SignalGraph {
            waveform: self.waveform,
            frequency,
            filter: self.filter,
            gain,
            duration,
        })
    }
}

/// A graph placed on the context timeline
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledGraph {
    pub graph: SignalGraph,
    /// Absolute context time in seconds
    pub start: f64,
}

impl ScheduledGraph {
    pub fn new(graph: SignalGraph, start: f64) -> Self {
        Self { graph, start }
    }

    pub fn stop(&self) -> f64 {
        self.start + self.graph.duration
    }
}
