// crates/nuggetcut-core/src/lib.rs
//
// Pure session data and logic — no egui, no channels, no threads.
// Used by both nuggetcut-media and nuggetcut-ui.

pub mod clip;
pub mod commands;
pub mod helpers;
pub mod media_types;
pub mod player;
pub mod state;
pub mod timeline;

// Re-export the main public API so downstream imports are simple.
pub use clip::{Clip, ClipError, ClipKind};
pub use commands::StudioCommand;
pub use media_types::{MediaEvent, PlayIntent};
pub use player::{PlaybackError, PlayerState};
pub use state::SessionState;
