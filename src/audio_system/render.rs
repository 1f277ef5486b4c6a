/// Graph rendering
///
/// Turns a `SignalGraph` into a mono rodio source. The source ends at the
/// graph's stop time, which is what disposes of the voice once the mixer has
/// drained it.
use std::time::Duration;

use rodio::Source;

use super::graph::{FilterState, SignalGraph};
use crate::error::AudioError;

/// One rendered voice: oscillator -> optional low-pass -> gain
pub struct VoiceSource {
    graph: SignalGraph,
    filter: Option<FilterState>,
    sample_rate: u32,
    phase: f32,
    position: u64,
    total_samples: u64,
}

impl VoiceSource {
    pub fn new(graph: SignalGraph, sample_rate: u32) -> Result<Self, AudioError> {
        let filter = graph
            .filter
            .map(|filter| filter.instantiate(sample_rate))
            .transpose()?;
        let total_samples = (graph.duration * sample_rate as f64).round() as u64;

        Ok(Self {
            graph,
            filter,
            sample_rate,
            phase: 0.0,
            position: 0,
            total_samples,
        })
    }
}

impl Iterator for VoiceSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.total_samples {
            return None;
        }

        let t = self.position as f64 / self.sample_rate as f64;
        let frequency = self.graph.frequency.value_at(t);

        let mut sample = self.graph.waveform.sample(self.phase);
        self.phase = (self.phase + frequency / self.sample_rate as f32).fract();

        if let Some(filter) = self.filter.as_mut() {
            sample = filter.process(sample);
        }

        self.position += 1;
        Some(sample * self.graph.gain.value_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_samples - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl Source for VoiceSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total_samples - self.position) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f64(self.graph.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio_system::source::SoundEffect;

    fn first_graph(effect: SoundEffect) -> SignalGraph {
        effect.voices().unwrap().remove(0).graph
    }

    #[test]
    fn test_voice_length_matches_duration() {
        let source = VoiceSource::new(first_graph(SoundEffect::StonePlace), 44_100).unwrap();
        assert_eq!(source.channels(), 1);
        assert_eq!(source.total_duration(), Some(Duration::from_secs_f64(0.2)));
        assert_eq!(source.count(), 8_820);
    }

    #[test]
    fn test_voice_stays_under_peak_and_decays() {
        let samples: Vec<f32> = VoiceSource::new(first_graph(SoundEffect::Error), 44_100)
            .unwrap()
            .collect();

        let peak = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert!(peak <= 0.2 + 1e-6, "peak = {}", peak);

        let tail = samples[samples.len() - 100..]
            .iter()
            .fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert!(tail < 0.02, "tail = {}", tail);
    }

    #[test]
    fn test_filtered_voice_renders() {
        let samples: Vec<f32> =
            VoiceSource::new(first_graph(SoundEffect::EnhancedStonePlace), 48_000)
                .unwrap()
                .collect();
        assert_eq!(samples.len(), 14_400);
        assert!(samples.iter().all(|s| s.is_finite()));
        assert!(samples.iter().any(|s| s.abs() > 0.01));
    }
}
