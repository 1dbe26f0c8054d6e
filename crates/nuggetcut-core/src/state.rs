// crates/nuggetcut-core/src/state.rs
//
// Single source of truth for one editing session. Owned by the app shell;
// panel modules read it shared and mutate only through StudioCommands.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clip::Clip;
use crate::player::PlayerState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Insertion order is display order.
    pub clips:          Vec<Clip>,
    pub selected_clip:  Option<Uuid>,
    pub player:         PlayerState,
    /// Last non-fatal playback failure, shown as a dismissible banner.
    #[serde(skip)]
    pub playback_error: Option<String>,
}

impl SessionState {
    /// Append a clip. Ids are unique per construction, so no dedup check.
    pub fn add_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    /// Remove a clip by id; no-op when absent. Clears the selection when it
    /// pointed at the removed clip, leaves it alone otherwise.
    pub fn remove_clip(&mut self, id: Uuid) {
        self.clips.retain(|c| c.id != id);
        if self.selected_clip == Some(id) {
            self.selected_clip = None;
        }
    }

    pub fn select_clip(&mut self, id: Option<Uuid>) {
        self.selected_clip = id;
    }

    /// Clips in insertion order, lazily.
    pub fn clips(&self) -> impl Iterator<Item = &Clip> {
        self.clips.iter()
    }

    pub fn clip(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    pub fn selected(&self) -> Option<&Clip> {
        self.selected_clip.and_then(|id| self.clip(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::ClipKind;

    fn clip(title: &str, start: f64, end: f64) -> Clip {
        Clip::new(title, start, end, ClipKind::Clip).unwrap()
    }

    #[test]
    fn clips_keep_insertion_order() {
        let mut s = SessionState::default();
        s.add_clip(clip("first", 0.0, 5.0));
        s.add_clip(clip("second", 5.0, 9.0));
        s.add_clip(clip("third", 1.0, 2.0));

        let titles: Vec<&str> = s.clips().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn deleting_the_selected_clip_clears_selection() {
        let mut s = SessionState::default();
        s.add_clip(clip("a", 0.0, 5.0));
        s.add_clip(clip("b", 5.0, 9.0));
        let b_id = s.clips[1].id;

        s.select_clip(Some(b_id));
        s.remove_clip(b_id);

        assert_eq!(s.clips.len(), 1);
        assert_eq!(s.clips[0].title, "a");
        assert_eq!(s.selected_clip, None);
    }

    #[test]
    fn deleting_another_clip_leaves_selection_alone() {
        let mut s = SessionState::default();
        s.add_clip(clip("a", 0.0, 5.0));
        s.add_clip(clip("b", 5.0, 9.0));
        let a_id = s.clips[0].id;
        let b_id = s.clips[1].id;

        s.select_clip(Some(b_id));
        s.remove_clip(a_id);

        assert_eq!(s.selected_clip, Some(b_id));
        assert!(s.selected().is_some());
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() {
        let mut s = SessionState::default();
        s.add_clip(clip("a", 0.0, 5.0));
        s.remove_clip(Uuid::new_v4());
        assert_eq!(s.clips.len(), 1);
    }

    #[test]
    fn selected_resolves_through_the_collection() {
        let mut s = SessionState::default();
        s.add_clip(clip("a", 0.0, 5.0));
        let id = s.clips[0].id;
        s.select_clip(Some(id));
        assert_eq!(s.selected().map(|c| c.title.as_str()), Some("a"));
        s.select_clip(None);
        assert!(s.selected().is_none());
    }
}
