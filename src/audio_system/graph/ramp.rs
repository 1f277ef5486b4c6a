/// Parameter automation
///
/// Curves for oscillator frequency and gain, evaluated relative to the start
/// of the graph that owns them.
use crate::error::AudioError;

/// Exponential ramp between two strictly positive values
///
/// Evaluates `from * (to / from)^(t / duration)` and holds `to` afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialRamp {
    from: f32,
    to: f32,
    duration: f64,
}

impl ExponentialRamp {
    /// Create a ramp, rejecting non-positive endpoints or duration
    pub fn new(from: f32, to: f32, duration: f64) -> Result<Self, AudioError> {
        let valid = from > 0.0
            && to > 0.0
            && from.is_finite()
            && to.is_finite()
            && duration > 0.0
            && duration.is_finite();
        if !valid {
            return Err(AudioError::InvalidRamp { from, to, duration });
        }
        Ok(Self { from, to, duration })
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Value at `t` seconds after the ramp starts
    pub fn value_at(&self, t: f64) -> f32 {
        if t <= 0.0 {
            return self.from;
        }
        if t >= self.duration {
            return self.to;
        }
        let ratio = (self.to / self.from) as f64;
        (self.from as f64 * ratio.powf(t / self.duration)) as f32
    }
}

/// Automation curve for a single parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamCurve {
    Constant(f32),
    Exponential(ExponentialRamp),
}

impl ParamCurve {
    pub fn exponential(from: f32, to: f32, duration: f64) -> Result<Self, AudioError> {
        ExponentialRamp::new(from, to, duration).map(ParamCurve::Exponential)
    }

    /// Value at the moment the owning graph starts
    pub fn initial_value(&self) -> f32 {
        match self {
            ParamCurve::Constant(value) => *value,
            ParamCurve::Exponential(ramp) => ramp.from(),
        }
    }

    /// Value once all automation has finished
    pub fn final_value(&self) -> f32 {
        match self {
            ParamCurve::Constant(value) => *value,
            ParamCurve::Exponential(ramp) => ramp.to(),
        }
    }

    pub fn value_at(&self, t: f64) -> f32 {
        match self {
            ParamCurve::Constant(value) => *value,
            ParamCurve::Exponential(ramp) => ramp.value_at(t),
        }
    }
}
