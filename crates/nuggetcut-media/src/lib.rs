// crates/nuggetcut-media/src/lib.rs
//
// The media-playback primitive: a background worker that stands in for a
// platform video surface. No egui dependency — communicates with
// nuggetcut-ui via channels only.
//
// To add a new media capability:
//   1. Create a new module file here
//   2. Add `mod mymodule;` below
//   3. Call it from worker.rs (or a new MediaWorker method)

pub mod source;
mod transport;
pub mod worker;

// Re-export the main public API so nuggetcut-ui imports are simple.
pub use source::MediaSource;
pub use worker::MediaWorker;
pub use nuggetcut_core::media_types::{MediaEvent, PlayIntent};
