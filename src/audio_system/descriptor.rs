/// Effect descriptors
///
/// Each effect expands to one or more voices: a graph plus its start offset
/// from the moment the effect is triggered.
use super::graph::{SignalGraph, Waveform};
use super::source::SoundEffect;
use crate::error::AudioError;

/// Peak gain for tonal cues
pub const TONE_PEAK_GAIN: f32 = 0.3;

/// Peak gain for the error buzz
pub const ERROR_PEAK_GAIN: f32 = 0.2;

/// C major arpeggio: C5, E5, G5, C6
pub const WIN_ARPEGGIO_HZ: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];

/// Length of each arpeggio note in seconds
pub const WIN_NOTE_DURATION: f64 = 0.15;

/// A graph and its offset from the trigger time
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub offset: f64,
    pub graph: SignalGraph,
}

impl SoundEffect {
    /// Expand the effect into the graphs it schedules
    pub fn voices(&self) -> Result<Vec<Voice>, AudioError> {
        match self {
            SoundEffect::StonePlace => single(
                SignalGraph::builder(Waveform::Sine)
                    .with_frequency_ramp(500.0, 300.0, 0.2)?
                    .with_decay(TONE_PEAK_GAIN, 0.2)?
                    .build()?,
            ),
            SoundEffect::EnhancedStonePlace => single(
                SignalGraph::builder(Waveform::Triangle)
                    .with_frequency_ramp(600.0, 300.0, 0.15)?
                    .with_low_pass(1000.0, 8.0)?
                    .with_decay(TONE_PEAK_GAIN, 0.3)?
                    .build()?,
            ),
            SoundEffect::Win => WIN_ARPEGGIO_HZ
                .iter()
                .enumerate()
                .map(|(index, &hz)| -> Result<Voice, AudioError> {
                    let graph = SignalGraph::builder(Waveform::Sine)
                        .with_frequency(hz)
                        .with_decay(TONE_PEAK_GAIN, WIN_NOTE_DURATION)?
                        .build()?;
                    Ok(Voice {
                        offset: index as f64 * WIN_NOTE_DURATION,
                        graph,
                    })
                })
                .collect(),
            SoundEffect::Draw => single(
                SignalGraph::builder(Waveform::Sine)
                    .with_frequency_ramp(440.0, 220.0, 0.5)?
                    .with_decay(TONE_PEAK_GAIN, 0.5)?
                    .build()?,
            ),
            SoundEffect::Error => single(
                SignalGraph::builder(Waveform::Square)
                    .with_frequency(150.0)
                    .with_decay(ERROR_PEAK_GAIN, 0.2)?
                    .build()?,
            ),
        }
    }
}

fn single(graph: SignalGraph) -> Result<Vec<Voice>, AudioError> {
    Ok(vec![Voice { offset: 0.0, graph }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio_system::graph::{ParamCurve, GAIN_FLOOR};

    #[test]
    fn test_every_effect_builds() {
        for effect in SoundEffect::ALL {
            let voices = effect.voices().unwrap();
            assert!(!voices.is_empty(), "{} has no voices", effect);
        }
    }

    #[test]
    fn test_envelopes_end_above_zero() {
        for effect in SoundEffect::ALL {
            for voice in effect.voices().unwrap() {
                assert_eq!(voice.graph.gain.final_value(), GAIN_FLOOR);
                assert!(voice.graph.gain.final_value() > 0.0);
            }
        }
    }

    #[test]
    fn test_stone_glide() {
        let voices = SoundEffect::StonePlace.voices().unwrap();
        let graph = &voices[0].graph;
        assert_eq!(graph.waveform, Waveform::Sine);
        assert_eq!(graph.frequency.initial_value(), 500.0);
        assert_eq!(graph.frequency.final_value(), 300.0);
        assert_eq!(graph.duration, 0.2);
    }

    #[test]
    fn test_enhanced_stone_has_filter_and_shorter_glide() {
        let voices = SoundEffect::EnhancedStonePlace.voices().unwrap();
        let graph = &voices[0].graph;
        assert_eq!(graph.waveform, Waveform::Triangle);
        let filter = graph.filter.expect("low-pass stage");
        assert_eq!(filter.cutoff_hz(), 1000.0);
        assert_eq!(filter.resonance_db(), 8.0);
        match graph.frequency {
            ParamCurve::Exponential(ramp) => assert_eq!(ramp.duration(), 0.15),
            other => panic!("expected a glide, got {:?}", other),
        }
        assert_eq!(graph.duration, 0.3);
    }

    #[test]
    fn test_win_arpeggio_offsets() {
        let voices = SoundEffect::Win.voices().unwrap();
        assert_eq!(voices.len(), 4);
        for (index, voice) in voices.iter().enumerate() {
            assert!((voice.offset - index as f64 * 0.15).abs() < 1e-9);
            assert_eq!(voice.graph.frequency, ParamCurve::Constant(WIN_ARPEGGIO_HZ[index]));
            assert_eq!(voice.graph.duration, WIN_NOTE_DURATION);
        }
    }

    #[test]
    fn test_error_buzz() {
        let voices = SoundEffect::Error.voices().unwrap();
        let graph = &voices[0].graph;
        assert_eq!(graph.waveform, Waveform::Square);
        assert_eq!(graph.frequency, ParamCurve::Constant(150.0));
        assert_eq!(graph.gain.initial_value(), ERROR_PEAK_GAIN);
    }
}
