// Integration tests for gomoku-sounds
// These drive the public API through a recording context and assert on the
// scheduled parameters rather than on audible output.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gomoku_sounds::audio_system::{
    AudioContext, ContextState, ParamCurve, ScheduledGraph, SoundBoard, SynthPlayer, Waveform,
    GAIN_FLOOR,
};
use gomoku_sounds::{AudioError, GameEvent, InteractionBus, InteractionEvent};

#[derive(Default)]
struct Timeline {
    scheduled: RefCell<Vec<ScheduledGraph>>,
    resumed: Cell<u32>,
}

struct RecordingContext {
    timeline: Rc<Timeline>,
    state: Cell<ContextState>,
}

impl AudioContext for RecordingContext {
    fn current_time(&self) -> f64 {
        0.0
    }

    fn state(&self) -> ContextState {
        self.state.get()
    }

    fn resume(&self) -> Result<(), AudioError> {
        if self.state.get() == ContextState::Suspended {
            self.timeline.resumed.set(self.timeline.resumed.get() + 1);
            self.state.set(ContextState::Running);
        }
        Ok(())
    }

    fn schedule(&self, graph: ScheduledGraph) -> Result<(), AudioError> {
        self.timeline.scheduled.borrow_mut().push(graph);
        Ok(())
    }
}

fn recording_player(initial: ContextState) -> (SynthPlayer<RecordingContext>, Rc<Timeline>) {
    let timeline = Rc::new(Timeline::default());
    let shared = Rc::clone(&timeline);
    let player = SynthPlayer::new(move || {
        Ok(RecordingContext {
            timeline: Rc::clone(&shared),
            state: Cell::new(initial),
        })
    });
    (player, timeline)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_win_schedules_four_notes_back_to_back() {
    let (player, timeline) = recording_player(ContextState::Running);
    assert!(player.ensure_ready());

    player.play_win();

    let scheduled = timeline.scheduled.borrow();
    assert_eq!(scheduled.len(), 4);

    let starts = [0.0, 0.15, 0.30, 0.45];
    let stops = [0.15, 0.30, 0.45, 0.60];
    let frequencies = [523.25, 659.25, 783.99, 1046.50];

    for (index, graph) in scheduled.iter().enumerate() {
        assert!(approx(graph.start, starts[index]), "start {}", graph.start);
        assert!(approx(graph.stop(), stops[index]), "stop {}", graph.stop());
        assert_eq!(graph.graph.frequency, ParamCurve::Constant(frequencies[index]));
        assert_eq!(graph.graph.waveform, Waveform::Sine);
        assert_eq!(graph.graph.gain.initial_value(), 0.3);
    }
}

#[test]
fn test_error_is_one_square_buzz() {
    let (player, timeline) = recording_player(ContextState::Running);
    assert!(player.ensure_ready());

    player.play_error();

    let scheduled = timeline.scheduled.borrow();
    assert_eq!(scheduled.len(), 1);
    let buzz = &scheduled[0];
    assert_eq!(buzz.graph.waveform, Waveform::Square);
    assert_eq!(buzz.graph.frequency, ParamCurve::Constant(150.0));
    assert_eq!(buzz.graph.gain.initial_value(), 0.2);
    assert!(approx(buzz.graph.duration, 0.2));
}

#[test]
fn test_envelopes_start_at_peak_and_end_above_zero() {
    let (player, timeline) = recording_player(ContextState::Running);
    assert!(player.ensure_ready());

    player.play_stone();
    player.play_enhanced_stone();
    player.play_win();
    player.play_draw();
    player.play_error();

    let scheduled = timeline.scheduled.borrow();
    assert_eq!(scheduled.len(), 8);
    for graph in scheduled.iter() {
        let peak = graph.graph.gain.initial_value();
        assert!(peak == 0.3 || peak == 0.2, "unexpected peak {}", peak);
        assert_eq!(graph.graph.gain.final_value(), GAIN_FLOOR);
        assert!(graph.graph.gain.final_value() > 0.0);
    }
}

#[test]
fn test_platform_failure_silences_everything() {
    let player: SynthPlayer<RecordingContext> =
        SynthPlayer::new(|| Err(AudioError::ContextUnavailable("web audio missing".into())));
    assert!(!player.ensure_ready());

    for event in [
        GameEvent::StonePlaced,
        GameEvent::GameWon,
        GameEvent::GameDrawn,
        GameEvent::InvalidMove,
    ] {
        player.on_game_event(event);
    }
    player.play_enhanced_stone();
    assert!(player.context().is_unavailable());
}

#[test]
fn test_suspended_context_plays_and_unlocks_on_touch() {
    let bus = InteractionBus::new();
    let (player, timeline) = recording_player(ContextState::Suspended);
    let player = player.with_interaction_bus(bus.clone());
    assert!(player.ensure_ready());

    // Scheduling while suspended is accepted
    player.play_stone();
    assert_eq!(timeline.scheduled.borrow().len(), 1);
    assert_eq!(timeline.resumed.get(), 0);

    bus.publish(InteractionEvent::TouchStart);
    player.play_draw();
    assert_eq!(timeline.resumed.get(), 1);
    assert_eq!(timeline.scheduled.borrow().len(), 2);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_game_events_choose_stone_variant() {
    let (player, timeline) = recording_player(ContextState::Running);
    let player = player.with_enhanced_stone(true);
    assert!(player.ensure_ready());

    player.on_game_event(GameEvent::StonePlaced);

    let scheduled = timeline.scheduled.borrow();
    assert_eq!(scheduled[0].graph.waveform, Waveform::Triangle);
    assert!(scheduled[0].graph.filter.is_some());
}
