/// Playback volume
///
/// Clamped to `[0.0, 1.0]` like a media element's volume.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    level: f32,
}

impl Volume {
    pub fn new(level: f32) -> Self {
        Self {
            level: if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) },
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamping() {
        assert_eq!(Volume::new(1.5).level(), 1.0);
        assert_eq!(Volume::new(-0.5).level(), 0.0);
        assert_eq!(Volume::new(f32::NAN).level(), 0.0);
        assert_eq!(Volume::new(0.7).level(), 0.7);
    }

    #[test]
    fn test_mute() {
        assert!(Volume::new(0.0).is_muted());
        assert!(!Volume::default().is_muted());
    }
}
