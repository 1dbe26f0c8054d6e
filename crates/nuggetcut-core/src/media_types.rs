// crates/nuggetcut-core/src/media_types.rs
//
// Types that flow across the channel between nuggetcut-media and
// nuggetcut-ui. No egui, no channels — just plain data.

use serde::{Deserialize, Serialize};

/// Token identifying one user "start playback" request.
///
/// Media play resolves asynchronously, so a resolution can arrive after the
/// user has already paused again. `PlayerState` bumps its counter on every
/// play *and* pause; a resolution whose token no longer matches the current
/// counter is stale and must be discarded — last user intent wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayIntent(pub u64);

/// Notifications sent from the media worker to the UI.
///
/// These are one-way observations of the playback surface, not commands:
/// the player state machine refreshes itself from them and never replies.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaEvent {
    /// Source metadata became available; duration is fixed from here on.
    MetadataLoaded { duration: f64 },
    /// Playback position progressed (or jumped after a seek).
    Position { seconds: f64 },
    /// An asynchronous play request actually started.
    PlayStarted { intent: PlayIntent },
    /// An asynchronous play request could not start.
    PlayFailed { intent: PlayIntent, reason: String },
}
