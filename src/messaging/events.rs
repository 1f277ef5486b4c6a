/// Event types consumed by the sound system
///
/// Events represent things that have happened (past tense).
/// Interaction events are broadcast to every subscriber; game events are
/// dispatched to whichever `SoundBoard` the game was set up with.

/// Raw user-interaction signals from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    /// Mouse button or pen pressed
    PointerDown,

    /// Finger touched the screen
    TouchStart,

    /// Key pressed; does not count as an audio-unlocking gesture
    KeyDown,
}

impl InteractionEvent {
    /// Whether this gesture is allowed to resume a suspended audio context
    pub fn unlocks_audio(&self) -> bool {
        matches!(self, InteractionEvent::PointerDown | InteractionEvent::TouchStart)
    }
}

/// Game outcomes and moves that have a sound cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    StonePlaced,
    GameWon,
    GameDrawn,
    InvalidMove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlocking_gestures() {
        assert!(InteractionEvent::PointerDown.unlocks_audio());
        assert!(InteractionEvent::TouchStart.unlocks_audio());
        assert!(!InteractionEvent::KeyDown.unlocks_audio());
    }
}
