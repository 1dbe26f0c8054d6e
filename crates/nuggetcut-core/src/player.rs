// crates/nuggetcut-core/src/player.rs
//
// Playback state machine. Owns the UI-visible play/pause/position/volume
// state and reconciles it with the media worker's asynchronous events.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media_types::{MediaEvent, PlayIntent};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Playback could not start: {0}")]
pub struct PlaybackError(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub is_playing:   bool,
    /// Seconds. Refreshed one-way from `MediaEvent::Position`; written
    /// directly on explicit seeks. Out-of-range values are corrected by the
    /// transport's own clamping, not here.
    pub current_time: f64,
    /// Seconds. 0.0 until metadata loads, fixed afterwards.
    pub duration:     f64,
    /// Stored volume in [0, 1]. Survives mute/unmute untouched.
    pub volume:       f32,
    pub is_muted:     bool,
    /// Monotonic play-intent counter. Bumped on every play and pause so a
    /// late async play resolution can be recognized as stale.
    #[serde(skip)]
    intent: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            is_playing:   false,
            current_time: 0.0,
            duration:     0.0,
            volume:       1.0,
            is_muted:     false,
            intent:       0,
        }
    }
}

impl PlayerState {
    /// Paused → Playing. Optimistic: `is_playing` flips immediately so the
    /// transport controls respond; the returned token travels with the
    /// asynchronous media play request and comes back in its resolution.
    pub fn begin_play(&mut self) -> PlayIntent {
        self.intent += 1;
        self.is_playing = true;
        PlayIntent(self.intent)
    }

    /// Playing → Paused. Media pause is synchronous and cannot fail, but the
    /// intent counter still advances so any in-flight play resolution is
    /// invalidated.
    pub fn pause(&mut self) {
        self.intent += 1;
        self.is_playing = false;
    }

    /// Valid in any state; does not change play/pause.
    pub fn seek(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Flips mute only. The stored volume is untouched so un-muting
    /// restores the previous level.
    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    /// Fold one media event into the state. Returns the error to surface
    /// when a current play request failed; stale resolutions return None
    /// and leave the state untouched.
    pub fn apply(&mut self, event: &MediaEvent) -> Option<PlaybackError> {
        match event {
            MediaEvent::Position { seconds } => {
                self.current_time = *seconds;
                None
            }
            MediaEvent::MetadataLoaded { duration } => {
                self.duration = *duration;
                None
            }
            MediaEvent::PlayStarted { intent } => {
                if intent.0 == self.intent {
                    self.is_playing = true;
                }
                None
            }
            MediaEvent::PlayFailed { intent, reason } => {
                if intent.0 == self.intent {
                    self.is_playing = false;
                    Some(PlaybackError(reason.clone()))
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_paused_at_full_volume() {
        let p = PlayerState::default();
        assert!(!p.is_playing);
        assert_eq!(p.current_time, 0.0);
        assert_eq!(p.duration, 0.0);
        assert_eq!(p.volume, 1.0);
        assert!(!p.is_muted);
    }

    #[test]
    fn unmuting_restores_the_stored_volume() {
        let mut p = PlayerState::default();
        p.set_volume(0.8);
        p.toggle_mute();
        assert!(p.is_muted);
        assert_eq!(p.volume, 0.8);
        p.toggle_mute();
        assert!(!p.is_muted);
        assert_eq!(p.volume, 0.8);
    }

    #[test]
    fn volume_is_clamped_to_unit_range() {
        let mut p = PlayerState::default();
        p.set_volume(1.6);
        assert_eq!(p.volume, 1.0);
        p.set_volume(-0.3);
        assert_eq!(p.volume, 0.0);
    }

    #[test]
    fn seek_moves_position_without_changing_play_state() {
        let mut p = PlayerState::default();
        p.begin_play();
        p.seek(42.5);
        assert_eq!(p.current_time, 42.5);
        assert!(p.is_playing);
    }

    #[test]
    fn metadata_and_position_events_refresh_state() {
        let mut p = PlayerState::default();
        assert!(p.apply(&MediaEvent::MetadataLoaded { duration: 596.0 }).is_none());
        assert_eq!(p.duration, 596.0);
        assert!(p.apply(&MediaEvent::Position { seconds: 12.25 }).is_none());
        assert_eq!(p.current_time, 12.25);
    }

    #[test]
    fn rapid_play_pause_ends_paused_whatever_the_resolution_order() {
        let mut p = PlayerState::default();
        let tok = p.begin_play();
        p.pause();

        // The play started confirmation lands after the pause — stale.
        assert!(p.apply(&MediaEvent::PlayStarted { intent: tok }).is_none());
        assert!(!p.is_playing);

        // Same for a late failure: no error surfaced, state untouched.
        let err = p.apply(&MediaEvent::PlayFailed {
            intent: tok,
            reason: "no media loaded".into(),
        });
        assert!(err.is_none());
        assert!(!p.is_playing);
    }

    #[test]
    fn current_play_failure_reverts_to_paused_and_surfaces() {
        let mut p = PlayerState::default();
        let tok = p.begin_play();
        assert!(p.is_playing);

        let err = p.apply(&MediaEvent::PlayFailed {
            intent: tok,
            reason: "no media loaded".into(),
        });
        assert_eq!(err, Some(PlaybackError("no media loaded".into())));
        assert!(!p.is_playing);
    }

    #[test]
    fn current_play_confirmation_keeps_playing() {
        let mut p = PlayerState::default();
        let tok = p.begin_play();
        assert!(p.apply(&MediaEvent::PlayStarted { intent: tok }).is_none());
        assert!(p.is_playing);
    }

    #[test]
    fn each_play_request_gets_a_fresh_token() {
        let mut p = PlayerState::default();
        let a = p.begin_play();
        p.pause();
        let b = p.begin_play();
        assert_ne!(a, b);
    }
}
