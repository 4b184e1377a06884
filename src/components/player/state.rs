// Local playback UI state for the mini-player. No audio engine sits behind it.

pub const DEFAULT_INITIAL_PROGRESS: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    is_playing: bool,
    progress: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_PROGRESS)
    }
}

impl PlaybackState {
    /// Clamps `initial_progress` into [0, 1]; NaN counts as 0.
    pub fn new(initial_progress: f64) -> Self {
        let progress = if initial_progress.is_nan() {
            0.0
        } else {
            initial_progress.clamp(0.0, 1.0)
        };
        Self {
            is_playing: false,
            progress,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn remaining(&self) -> f64 {
        1.0 - self.progress
    }

    /// Filled and unfilled track widths as percentages summing to 100.
    pub fn segments(&self) -> (f64, f64) {
        let unfilled = self.remaining() * 100.0;
        (100.0 - unfilled, unfilled)
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn skip_forward(&mut self) {
        // TODO: advance to the next chapter once uploads carry an audio queue.
        log::debug!("skip forward pressed; no queue to advance");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_initial_progress() {
        assert_eq!(PlaybackState::new(1.5).progress(), 1.0);
        assert_eq!(PlaybackState::new(1.5).remaining(), 0.0);
        assert_eq!(PlaybackState::new(-0.3).progress(), 0.0);
        assert_eq!(PlaybackState::new(0.18).progress(), 0.18);
        assert_eq!(PlaybackState::new(f64::INFINITY).progress(), 1.0);
        assert_eq!(PlaybackState::new(f64::NEG_INFINITY).progress(), 0.0);
        assert_eq!(PlaybackState::new(f64::NAN).progress(), 0.0);
    }

    #[test]
    fn default_starts_a_quarter_in_and_paused() {
        let state = PlaybackState::default();
        assert_eq!(state.progress(), 0.25);
        assert!(!state.is_playing());
    }

    #[test]
    fn progress_and_remaining_fill_the_track() {
        for input in [0.0, 1e-17, 0.1, 0.18, 0.25, 1.0 / 3.0, 0.5, 0.7, 0.999_999, 1.0, 2.0, -1.0] {
            let state = PlaybackState::new(input);
            assert_eq!(state.progress() + state.remaining(), 1.0, "input {input}");
        }
    }

    #[test]
    fn segments_split_the_track_in_percent() {
        assert_eq!(PlaybackState::new(0.25).segments(), (25.0, 75.0));
        assert_eq!(PlaybackState::new(3.0).segments(), (100.0, 0.0));
        assert_eq!(PlaybackState::new(f64::NAN).segments(), (0.0, 100.0));

        for input in [0.0, 1e-17, 0.1, 0.18, 1.0 / 3.0, 0.5, 0.7, 0.999_999, 1.0] {
            let (filled, unfilled) = PlaybackState::new(input).segments();
            assert!(filled >= 0.0 && unfilled >= 0.0, "input {input}");
            assert_eq!(filled + unfilled, 100.0, "input {input}");
        }
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut state = PlaybackState::new(0.4);
        state.toggle_play();
        assert!(state.is_playing());
        state.toggle_play();
        assert!(!state.is_playing());
    }

    #[test]
    fn skip_forward_changes_nothing() {
        let mut state = PlaybackState::new(0.4);
        state.toggle_play();
        let before = state;
        state.skip_forward();
        assert_eq!(state, before);
    }
}
