use crate::document::SceneRecord;

/// Countdown driving timer-based auto-advance. `duration_seconds` is
/// advisory in the sequencer itself; a front end that wants hands-free
/// playback arms this from each `SceneChanged` and calls
/// `CutsceneSequencer::advance` when [`AutoAdvance::tick`] reports expiry.
///
/// Scenes with a non-positive duration never auto-advance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AutoAdvance {
    remaining_seconds: Option<f32>,
}

impl AutoAdvance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, scene: &SceneRecord) {
        self.remaining_seconds = if scene.duration_seconds > 0.0 {
            Some(scene.duration_seconds)
        } else {
            None
        };
    }

    pub fn disarm(&mut self) {
        self.remaining_seconds = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_seconds.is_some()
    }

    /// Returns true exactly once when the countdown elapses, then disarms.
    pub fn tick(&mut self, dt_seconds: f32) -> bool {
        let Some(remaining) = self.remaining_seconds else {
            return false;
        };
        let remaining = remaining - dt_seconds;
        if remaining <= 0.0 {
            self.remaining_seconds = None;
            true
        } else {
            self.remaining_seconds = Some(remaining);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed_scene(duration_seconds: f32) -> SceneRecord {
        SceneRecord {
            duration_seconds,
            ..SceneRecord::default()
        }
    }

    #[test]
    fn fires_once_when_duration_elapses() {
        let mut timer = AutoAdvance::new();
        timer.arm(&timed_scene(1.0));

        assert!(!timer.tick(0.4));
        assert!(!timer.tick(0.4));
        assert!(timer.tick(0.4));
        assert!(!timer.is_armed());
        assert!(!timer.tick(10.0));
    }

    #[test]
    fn zero_duration_never_arms() {
        let mut timer = AutoAdvance::new();
        timer.arm(&timed_scene(0.0));
        assert!(!timer.is_armed());
        assert!(!timer.tick(100.0));
    }

    #[test]
    fn rearming_replaces_the_countdown() {
        let mut timer = AutoAdvance::new();
        timer.arm(&timed_scene(5.0));
        timer.arm(&timed_scene(0.5));
        assert!(timer.tick(0.6));
    }

    #[test]
    fn disarm_cancels_a_pending_countdown() {
        let mut timer = AutoAdvance::new();
        timer.arm(&timed_scene(1.0));
        timer.disarm();
        assert!(!timer.tick(2.0));
    }
}
