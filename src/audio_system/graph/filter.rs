/// Low-pass filter stage
///
/// Parameters follow the platform biquad node: cutoff in Hz and resonance Q in
/// dB. The runtime state is a `biquad` direct-form-1 section.
use biquad::{Biquad, Coefficients, DirectForm1, ToHertz, Type};

use crate::error::AudioError;

/// Resonant low-pass filter configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassFilter {
    cutoff_hz: f32,
    resonance_db: f32,
}

impl LowPassFilter {
    pub fn new(cutoff_hz: f32, resonance_db: f32) -> Result<Self, AudioError> {
        if !(cutoff_hz > 0.0 && cutoff_hz.is_finite()) {
            return Err(AudioError::InvalidFilter(format!(
                "cutoff must be positive, got {}",
                cutoff_hz
            )));
        }
        if !resonance_db.is_finite() {
            return Err(AudioError::InvalidFilter(format!(
                "resonance must be finite, got {}",
                resonance_db
            )));
        }
        Ok(Self {
            cutoff_hz,
            resonance_db,
        })
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn resonance_db(&self) -> f32 {
        self.resonance_db
    }

    /// Linear Q for the biquad design equations
    pub fn q_linear(&self) -> f32 {
        10f32.powf(self.resonance_db / 20.0)
    }

    /// Build the per-voice filter state for a given output rate
    pub fn instantiate(&self, sample_rate: u32) -> Result<FilterState, AudioError> {
        let coefficients = Coefficients::<f32>::from_params(
            Type::LowPass,
            (sample_rate as f32).hz(),
            self.cutoff_hz.hz(),
            self.q_linear(),
        )
        .map_err(|e| AudioError::InvalidFilter(format!("{:?}", e)))?;

        Ok(FilterState {
            section: DirectForm1::<f32>::new(coefficients),
        })
    }
}

/// Running filter owned by a single voice
pub struct FilterState {
    section: DirectForm1<f32>,
}

impl FilterState {
    pub fn process(&mut self, input: f32) -> f32 {
        self.section.run(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resonance_is_decibels() {
        let filter = LowPassFilter::new(1000.0, 8.0).unwrap();
        assert!((filter.q_linear() - 2.5119).abs() < 1e-3);

        let flat = LowPassFilter::new(1000.0, 0.0).unwrap();
        assert!((flat.q_linear() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_bad_cutoff() {
        assert!(LowPassFilter::new(0.0, 8.0).is_err());
        assert!(LowPassFilter::new(f32::INFINITY, 8.0).is_err());
    }

    #[test]
    fn test_cutoff_above_nyquist_fails_to_instantiate() {
        let filter = LowPassFilter::new(30_000.0, 8.0).unwrap();
        assert!(filter.instantiate(44_100).is_err());
    }

    #[test]
    fn test_passes_dc_and_attenuates_nyquist() {
        let filter = LowPassFilter::new(1000.0, 0.0).unwrap();

        let mut dc = filter.instantiate(44_100).unwrap();
        let mut last = 0.0;
        for _ in 0..4096 {
            last = dc.process(1.0);
        }
        assert!((last - 1.0).abs() < 0.01);

        let mut alternating = filter.instantiate(44_100).unwrap();
        let mut peak = 0.0f32;
        for n in 0..4096 {
            let x = if n % 2 == 0 { 1.0 } else { -1.0 };
            let y = alternating.process(x);
            if n > 2048 {
                peak = peak.max(y.abs());
            }
        }
        assert!(peak < 0.01, "peak = {}", peak);
    }
}
