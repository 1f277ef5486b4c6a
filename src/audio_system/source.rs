/// Sound identifiers
///
/// `SoundEffect` names the synthesized cues, `SoundFile` the preloaded clips.
use std::fmt;

/// Synthesized sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Short sine "click" when a stone lands
    StonePlace,

    /// Filtered triangle variant of the stone click
    EnhancedStonePlace,

    /// Ascending four-note arpeggio
    Win,

    /// Descending tone
    Draw,

    /// Low square-wave buzz for an invalid move
    Error,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::StonePlace,
        SoundEffect::EnhancedStonePlace,
        SoundEffect::Win,
        SoundEffect::Draw,
        SoundEffect::Error,
    ];
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundEffect::StonePlace => write!(f, "stone"),
            SoundEffect::EnhancedStonePlace => write!(f, "enhanced stone"),
            SoundEffect::Win => write!(f, "win"),
            SoundEffect::Draw => write!(f, "draw"),
            SoundEffect::Error => write!(f, "error"),
        }
    }
}

/// Preloaded sound clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundFile {
    StonePlace,
    Win,
    Draw,
    Error,
}

impl SoundFile {
    pub const ALL: [SoundFile; 4] = [
        SoundFile::StonePlace,
        SoundFile::Win,
        SoundFile::Draw,
        SoundFile::Error,
    ];

    /// File name inside the sounds directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundFile::StonePlace => "stone_place.mp3",
            SoundFile::Win => "win.mp3",
            SoundFile::Draw => "draw.mp3",
            SoundFile::Error => "error.mp3",
        }
    }
}

impl fmt::Display for SoundFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundFile::StonePlace => write!(f, "Stone Place"),
            SoundFile::Win => write!(f, "Win"),
            SoundFile::Draw => write!(f, "Draw"),
            SoundFile::Error => write!(f, "Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_display() {
        assert_eq!(SoundEffect::StonePlace.to_string(), "stone");
        assert_eq!(SoundEffect::EnhancedStonePlace.to_string(), "enhanced stone");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(SoundFile::StonePlace.file_name(), "stone_place.mp3");
        assert_eq!(SoundFile::Error.file_name(), "error.mp3");
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = SoundFile::ALL.iter().map(|f| f.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SoundFile::ALL.len());
    }
}
