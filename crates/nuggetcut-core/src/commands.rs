// crates/nuggetcut-core/src/commands.rs
//
// Every user action in NuggetCut is expressed as a StudioCommand.
// Modules emit these; app.rs processes them after the UI pass.
// Adding a new feature = add a variant here + one match arm in app.rs.

use uuid::Uuid;

use crate::clip::Clip;

#[derive(Debug, Clone)]
pub enum StudioCommand {
    // ── Playback ─────────────────────────────────────────────────────────────
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
    ToggleMute,
    /// Clear the non-fatal playback error banner.
    DismissPlaybackError,

    // ── Clips ────────────────────────────────────────────────────────────────
    /// Insert an already-validated clip into the library.
    AddClip(Clip),
    DeleteClip(Uuid),
    /// Mark a clip current (or clear with None). A selection *change* also
    /// seeks the player to the clip's start; playback start stays manual.
    SelectClip(Option<Uuid>),
}
