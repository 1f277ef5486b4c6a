/// Process-wide sound functions
///
/// One synthesized player per thread, created by `init_sound_system` (the
/// "document ready" moment) and consulted by every play function. Before
/// initialization all play functions are silent no-ops.
use std::cell::RefCell;

use crate::audio_system::{RodioContext, SoundBoard, SynthPlayer};
use crate::config::Config;
use crate::messaging::{GameEvent, InteractionBus};

thread_local! {
    static SYNTH: RefCell<Option<SynthPlayer<RodioContext>>> = const { RefCell::new(None) };
}

/// Open the audio context for this thread
///
/// Returns whether audio is available. Calling again keeps the first player
/// and returns its cached outcome.
pub fn init_sound_system(config: &Config, bus: &InteractionBus) -> bool {
    SYNTH.with(|slot| {
        let mut slot = slot.borrow_mut();
        let player = slot.get_or_insert_with(|| {
            let options = config.context_options();
            SynthPlayer::new(move || RodioContext::try_new(options))
                .with_interaction_bus(bus.clone())
                .with_enhanced_stone(config.enhanced_stone)
        });
        player.ensure_ready()
    })
}

fn with_player(f: impl FnOnce(&SynthPlayer<RodioContext>)) {
    SYNTH.with(|slot| {
        if let Some(player) = slot.borrow().as_ref() {
            f(player);
        }
    });
}

pub fn play_stone_sound() {
    with_player(SynthPlayer::play_stone);
}

pub fn play_enhanced_stone_sound() {
    with_player(SynthPlayer::play_enhanced_stone);
}

pub fn play_win_sound() {
    with_player(SynthPlayer::play_win);
}

pub fn play_draw_sound() {
    with_player(SynthPlayer::play_draw);
}

pub fn play_error_sound() {
    with_player(SynthPlayer::play_error);
}

/// Play the cue for a game event, honouring the enhanced stone setting
pub fn on_game_event(event: GameEvent) {
    with_player(|player| player.on_game_event(event));
}

/// Handle pending clicks or touches without playing anything
pub fn poll_unlock() {
    with_player(|player| player.context().poll_unlock());
}
