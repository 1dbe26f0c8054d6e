// crates/nuggetcut-ui/src/modules/mod.rs
//
// Module registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing StudioModule
//   2. Add `pub mod mypanel;` below
//   3. Render it from app.rs

pub mod creator;
pub mod library;
pub mod player;
pub mod timeline;

use egui::Ui;
use nuggetcut_core::{SessionState, StudioCommand};

/// Every panel implements this trait.
/// Modules read state and emit commands — they never mutate state directly.
pub trait StudioModule {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<StudioCommand>);
}
