//! Audio Playback Capability
//!
//! [`AudioPlayer`] is the seam between the animator and whatever audio
//! backend the host uses. The animator never tracks playback state on its
//! own; it queries [`AudioPlayer::state`] before each command.
//!
//! [`AudioSource`] is a state-only implementation for headless hosts and
//! tests: it follows the play/pause/stop transitions and a playback cursor
//! without decoding or emitting anything.

/// Playback state reported by an [`AudioPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// An external audio player.
pub trait AudioPlayer {
    fn state(&self) -> PlaybackState;

    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);

    #[inline]
    fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }
}

/// A clip player that only tracks state.
#[derive(Debug, Clone)]
pub struct AudioSource {
    pub clip: String,
    state: PlaybackState,
    /// Playback cursor in seconds.
    position: f32,
}

impl AudioSource {
    #[must_use]
    pub fn new(clip: impl Into<String>) -> Self {
        Self {
            clip: clip.into(),
            state: PlaybackState::Stopped,
            position: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Moves the playback cursor forward while playing.
    pub fn advance(&mut self, dt: f32) {
        if self.state == PlaybackState::Playing {
            self.position += dt.max(0.0);
        }
    }
}

impl AudioPlayer for AudioSource {
    fn state(&self) -> PlaybackState {
        self.state
    }

    /// Resumes from the cursor when paused, otherwise restarts the clip.
    fn play(&mut self) {
        if self.state != PlaybackState::Paused {
            self.position = 0.0;
        }
        log::debug!("Audio '{}' playing from {:.2}s", self.clip, self.position);
        self.state = PlaybackState::Playing;
    }

    fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            log::debug!("Audio '{}' paused at {:.2}s", self.clip, self.position);
            self.state = PlaybackState::Paused;
        }
    }

    fn stop(&mut self) {
        log::debug!("Audio '{}' stopped", self.clip);
        self.state = PlaybackState::Stopped;
        self.position = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_then_play_resumes_from_cursor() {
        let mut source = AudioSource::new("theme");
        source.play();
        source.advance(1.5);
        source.pause();
        source.advance(10.0);
        assert_eq!(source.position(), 1.5);

        source.play();
        assert_eq!(source.state(), PlaybackState::Playing);
        assert_eq!(source.position(), 1.5);
    }

    #[test]
    fn stop_rewinds() {
        let mut source = AudioSource::new("theme");
        source.play();
        source.advance(2.0);
        source.stop();

        assert_eq!(source.state(), PlaybackState::Stopped);
        assert_eq!(source.position(), 0.0);
        assert!(!source.is_playing());
    }

    #[test]
    fn pause_while_stopped_stays_stopped() {
        let mut source = AudioSource::new("theme");
        source.pause();
        assert_eq!(source.state(), PlaybackState::Stopped);
    }
}
