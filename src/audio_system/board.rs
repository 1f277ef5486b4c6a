/// Game event dispatch
///
/// Lets the game pick a playback strategy once and then forward move and
/// outcome events without caring which one it picked.
use super::context::AudioContext;
use super::player::{ClipOutput, FilePlayer};
use super::source::{SoundEffect, SoundFile};
use super::synth::SynthPlayer;
use crate::messaging::GameEvent;

pub trait SoundBoard {
    /// Play the cue for `event`; never fails
    fn on_game_event(&self, event: GameEvent);
}

impl<C: AudioContext> SoundBoard for SynthPlayer<C> {
    fn on_game_event(&self, event: GameEvent) {
        let effect = match event {
            GameEvent::StonePlaced if self.enhanced_stone() => SoundEffect::EnhancedStonePlace,
            GameEvent::StonePlaced => SoundEffect::StonePlace,
            GameEvent::GameWon => SoundEffect::Win,
            GameEvent::GameDrawn => SoundEffect::Draw,
            GameEvent::InvalidMove => SoundEffect::Error,
        };
        self.play(effect);
    }
}

impl<O: ClipOutput> SoundBoard for FilePlayer<O> {
    fn on_game_event(&self, event: GameEvent) {
        let file = match event {
            GameEvent::StonePlaced => SoundFile::StonePlace,
            GameEvent::GameWon => SoundFile::Win,
            GameEvent::GameDrawn => SoundFile::Draw,
            GameEvent::InvalidMove => SoundFile::Error,
        };
        self.play_sound(file);
    }
}
