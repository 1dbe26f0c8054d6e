// crates/nuggetcut-ui/src/modules/library.rs
use super::StudioModule;
use crate::helpers::format::truncate;
use crate::theme::{
    ACCENT, DARK_BG_2, DARK_BG_3, DARK_BG_4, DARK_BORDER, DARK_TEXT_DIM, KIND_CLIP, KIND_NUGGET,
};
use egui::{Align, Color32, Id, Layout, RichText, Sense, Stroke, Ui, Vec2};
use nuggetcut_core::clip::{Clip, ClipKind};
use nuggetcut_core::helpers::time::{format_duration, format_time};
use nuggetcut_core::{SessionState, StudioCommand};
use uuid::Uuid;

pub struct LibraryModule;

fn kind_color(kind: ClipKind) -> Color32 {
    match kind {
        ClipKind::Clip => KIND_CLIP,
        ClipKind::Nugget => KIND_NUGGET,
    }
}

fn kind_icon(kind: ClipKind) -> &'static str {
    match kind {
        ClipKind::Clip => "✂",
        ClipKind::Nugget => "⚡",
    }
}

impl StudioModule for LibraryModule {
    fn name(&self) -> &str {
        "Clips Library"
    }

    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<StudioCommand>) {
        // ── Hotkeys ──────────────────────────────────────────────────────────
        // Guarded so Backspace in the creator's title field never deletes.
        if !ui.ctx().wants_keyboard_input()
            && ui.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace))
        {
            if let Some(id) = state.selected_clip {
                cmd.push(StudioCommand::DeleteClip(id));
            }
        }

        ui.vertical(|ui| {
            // ── Header ───────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("🗂 {}", self.name())).size(12.0).strong());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("{} clips", state.clips.len()))
                                    .size(10.0)
                                    .color(ACCENT),
                            );
                        });
                    });
                });

            ui.separator();

            if state.selected_clip.is_some() {
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    ui.label(RichText::new("Del to remove").size(9.0).color(DARK_TEXT_DIM));
                });
            }

            // ── Cards ────────────────────────────────────────────────────────
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(4.0);

                let bg_resp = ui.interact(
                    ui.available_rect_before_wrap(),
                    Id::new("library_bg"),
                    Sense::click(),
                );
                if bg_resp.clicked() {
                    cmd.push(StudioCommand::SelectClip(None));
                }

                if state.clips.is_empty() {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("✂").size(32.0));
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new("No clips created yet\nCreate your first clip with the controls on the left")
                                .size(11.0)
                                .color(DARK_TEXT_DIM),
                        );
                    });
                    return;
                }

                let mut to_delete: Option<Uuid> = None;

                for clip in state.clips() {
                    self.clip_card(ui, state, clip, cmd, &mut to_delete);
                    ui.add_space(6.0);
                }

                if let Some(id) = to_delete {
                    cmd.push(StudioCommand::DeleteClip(id));
                }

                ui.add_space(8.0);
            });
        });
    }
}

impl LibraryModule {
    fn clip_card(
        &self,
        ui: &mut Ui,
        state: &SessionState,
        clip: &Clip,
        cmd: &mut Vec<StudioCommand>,
        to_delete: &mut Option<Uuid>,
    ) {
        let id = clip.id;
        let is_selected = state.selected_clip == Some(id);
        let accent = kind_color(clip.kind);

        let border = if is_selected { ACCENT } else { DARK_BORDER };
        let fill = if is_selected { DARK_BG_4 } else { DARK_BG_3 };

        let card_resp = egui::Frame::new()
            .fill(fill)
            .stroke(Stroke::new(if is_selected { 1.5 } else { 1.0 }, border))
            .corner_radius(egui::CornerRadius::same(5))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                // Title row with the delete action on the right.
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(truncate(&clip.title, 28))
                            .size(12.0)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .small_button(RichText::new("🗑").size(11.0))
                            .on_hover_text("Delete clip")
                            .clicked()
                        {
                            *to_delete = Some(id);
                        }
                    });
                });

                // Kind badge + duration.
                ui.horizontal(|ui| {
                    egui::Frame::new()
                        .fill(accent.linear_multiply(0.2))
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("{} {}", kind_icon(clip.kind), clip.kind.label()))
                                    .size(9.0)
                                    .color(accent),
                            );
                        });
                    ui.label(
                        RichText::new(format_duration(clip.duration))
                            .size(10.0)
                            .color(DARK_TEXT_DIM),
                    );
                });

                // Start/End row.
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Start: {}", format_time(clip.start_time)))
                            .monospace()
                            .size(9.0)
                            .color(DARK_TEXT_DIM),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("End: {}", format_time(clip.end_time)))
                                .monospace()
                                .size(9.0)
                                .color(DARK_TEXT_DIM),
                        );
                    });
                });

                // Range bar. Width is fixed at 100% — per-clip playback
                // progress is not wired to the player position yet.
                let (bar, _) =
                    ui.allocate_exact_size(Vec2::new(ui.available_width(), 4.0), Sense::hover());
                ui.painter().rect_filled(bar, 2.0, accent);

                ui.add_space(4.0);

                // Play action.
                let label = if is_selected { "▶ Currently Playing" } else { "▶ Play Clip" };
                let play = egui::Button::new(RichText::new(label).size(10.0))
                    .min_size(egui::vec2(ui.available_width(), 22.0));
                if ui.add(play).clicked() {
                    cmd.push(StudioCommand::SelectClip(Some(id)));
                }
            })
            .response;

        // Registered after the card contents; the smaller buttons inside
        // still win the hit-test.
        let interact = ui.interact(card_resp.rect, Id::new(("clip_card", id)), Sense::click());
        if interact.clicked() {
            cmd.push(StudioCommand::SelectClip(Some(id)));
        }
        if interact.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }
}
