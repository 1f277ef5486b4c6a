/// Periodic waveform shapes
use std::f32::consts::TAU;

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

impl Waveform {
    /// Sample the waveform at `phase` in cycles, `[0, 1)`
    ///
    /// All shapes start at zero (or the rising edge for square) like the
    /// platform oscillators they stand in for.
    pub fn sample(&self, phase: f32) -> f32 {
        let phase = phase.rem_euclid(1.0);
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => {
                let shifted = (phase + 0.75).fract();
                4.0 * (shifted - 0.5).abs() - 1.0
            }
        }
    }
}
