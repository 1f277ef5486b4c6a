/// Synthesized effect player
///
/// Each play call builds fresh graphs from the effect's descriptor and
/// schedules them on the shared context. Nothing is queued or rate limited;
/// overlapping calls simply overlap in the mixer.
use super::context::{AudioContext, SharedContext};
use super::graph::ScheduledGraph;
use super::source::SoundEffect;
use crate::error::AudioError;
use crate::messaging::InteractionBus;

pub struct SynthPlayer<C: AudioContext> {
    context: SharedContext<C>,
    enhanced_stone: bool,
}

impl<C: AudioContext> SynthPlayer<C> {
    /// Create a player; the context is not opened until `ensure_ready`
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<C, AudioError> + 'static,
    {
        Self {
            context: SharedContext::new(factory),
            enhanced_stone: false,
        }
    }

    pub fn with_interaction_bus(mut self, bus: InteractionBus) -> Self {
        self.context = self.context.with_interaction_bus(bus);
        self
    }

    /// Use the filtered stone sound for `StonePlaced` game events
    pub fn with_enhanced_stone(mut self, enabled: bool) -> Self {
        self.enhanced_stone = enabled;
        self
    }

    pub fn enhanced_stone(&self) -> bool {
        self.enhanced_stone
    }

    /// Open the shared context once; see `SharedContext::ensure_ready`
    pub fn ensure_ready(&self) -> bool {
        self.context.ensure_ready()
    }

    pub fn context(&self) -> &SharedContext<C> {
        &self.context
    }

    pub fn play_stone(&self) {
        self.play(SoundEffect::StonePlace);
    }

    pub fn play_enhanced_stone(&self) {
        self.play(SoundEffect::EnhancedStonePlace);
    }

    pub fn play_win(&self) {
        self.play(SoundEffect::Win);
    }

    pub fn play_draw(&self) {
        self.play(SoundEffect::Draw);
    }

    pub fn play_error(&self) {
        self.play(SoundEffect::Error);
    }

    /// Schedule `effect` now; failures are logged, never returned
    pub fn play(&self, effect: SoundEffect) {
        let Some(context) = self.context.get() else {
            if self.context.is_unavailable() {
                tracing::debug!("{} sound (silent mode)", effect);
            }
            return;
        };

        if let Err(e) = schedule_effect(context, effect) {
            tracing::warn!("Error playing {} sound: {}", effect, e);
        }
    }
}

fn schedule_effect<C: AudioContext>(context: &C, effect: SoundEffect) -> Result<(), AudioError> {
    let base = context.current_time();
    for voice in effect.voices()? {
        context.schedule(ScheduledGraph::new(voice.graph, base + voice.offset))?;
    }
    Ok(())
}
