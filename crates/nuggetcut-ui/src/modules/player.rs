// crates/nuggetcut-ui/src/modules/player.rs
use super::StudioModule;
use crate::theme::{ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM, ERROR_RED};
use egui::{
    Align, Align2, Color32, FontId, Layout, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2,
};
use nuggetcut_core::helpers::time::format_time;
use nuggetcut_core::{SessionState, StudioCommand};

const BAR_H: f32 = 36.0;
const VOL_W: f32 = 90.0;

/// Standard transport button — consistent height, icon-forward.
fn tool_btn(label: impl Into<egui::WidgetText>) -> egui::Button<'static> {
    egui::Button::new(label).min_size(egui::vec2(30.0, 26.0))
}

pub struct PlayerModule;

impl StudioModule for PlayerModule {
    fn name(&self) -> &str {
        "Monitor"
    }

    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<StudioCommand>) {
        // Space toggles playback unless a text field owns the keyboard.
        if !ui.ctx().wants_keyboard_input() && ui.input(|i| i.key_pressed(egui::Key::Space)) {
            cmd.push(if state.player.is_playing {
                StudioCommand::Pause
            } else {
                StudioCommand::Play
            });
        }

        ui.vertical(|ui| {
            // ── Header ───────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 5, bottom: 5 })
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("📺 {}", self.name())).size(12.0).strong());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new("Sample video — CRM source stand-in")
                                    .size(10.0)
                                    .color(DARK_TEXT_DIM),
                            );
                        });
                    });
                });

            // ── Playback error banner ────────────────────────────────────────
            if let Some(err) = &state.playback_error {
                egui::Frame::new()
                    .fill(ERROR_RED.linear_multiply(0.15))
                    .stroke(Stroke::new(1.0, ERROR_RED))
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("⚠ {err}")).size(11.0).color(ERROR_RED));
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.small_button("Dismiss").clicked() {
                                    cmd.push(StudioCommand::DismissPlaybackError);
                                }
                            });
                        });
                    });
            }

            ui.add_space(4.0);

            // ── Video canvas ─────────────────────────────────────────────────
            let panel_w = ui.available_width();
            let canvas_h = (panel_w * 9.0 / 16.0).clamp(160.0, 420.0);
            let (canvas, canvas_resp) =
                ui.allocate_exact_size(Vec2::new(panel_w, canvas_h), Sense::click());
            let painter = ui.painter().clone();

            if state.player.is_playing {
                painter.rect_stroke(
                    canvas.expand(2.0),
                    4.0,
                    Stroke::new(1.5, ACCENT.gamma_multiply(0.55)),
                    egui::StrokeKind::Outside,
                );
            } else {
                painter.rect_stroke(
                    canvas.expand(1.0),
                    4.0,
                    Stroke::new(1.0, DARK_BORDER),
                    egui::StrokeKind::Outside,
                );
            }
            painter.rect_filled(canvas, 3.0, Color32::BLACK);

            if state.player.duration <= 0.0 {
                // Metadata not in yet — name + spinner.
                painter.text(
                    canvas.center() - egui::vec2(0.0, 20.0),
                    Align2::CENTER_CENTER,
                    "LOADING MEDIA",
                    FontId::monospace(13.0),
                    Color32::from_gray(70),
                );
                let t = ui.input(|i| i.time) as f32;
                let cx = canvas.center() + egui::vec2(0.0, 20.0);
                let r = 12.0_f32;
                painter.circle_stroke(cx, r, Stroke::new(1.5, Color32::from_gray(35)));
                let a = t * 3.5;
                painter.line_segment(
                    [cx, cx + egui::vec2(a.cos() * r, a.sin() * r)],
                    Stroke::new(2.0, ACCENT),
                );
                ui.ctx().request_repaint();
            } else {
                // No decode path exists — the canvas shows the transport
                // position where frames would be.
                let mut y = canvas.min.y;
                while y < canvas.max.y {
                    painter.line_segment(
                        [Pos2::new(canvas.min.x, y), Pos2::new(canvas.max.x, y)],
                        Stroke::new(0.5, Color32::from_rgba_unmultiplied(255, 255, 255, 3)),
                    );
                    y += 4.0;
                }
                painter.text(
                    canvas.center(),
                    Align2::CENTER_CENTER,
                    format_time(state.player.current_time),
                    FontId::monospace(28.0),
                    Color32::from_gray(120),
                );
                painter.text(
                    canvas.center() + egui::vec2(0.0, 26.0),
                    Align2::CENTER_CENTER,
                    if state.player.is_playing { "● PLAYING" } else { "∥ PAUSED" },
                    FontId::monospace(10.0),
                    if state.player.is_playing { ACCENT } else { Color32::from_gray(60) },
                );
            }

            // Selected clip pill, top-left of the canvas.
            if let Some(clip) = state.selected() {
                let galley = painter.layout_no_wrap(
                    format!("Playing: {}", clip.title),
                    FontId::proportional(11.0),
                    Color32::WHITE,
                );
                let pad = egui::vec2(9.0, 4.0);
                let pill = Rect::from_min_size(
                    canvas.min + egui::vec2(10.0, 10.0),
                    galley.size() + pad * 2.0,
                );
                painter.rect_filled(pill, 10.0, ACCENT);
                painter.galley(pill.min + pad, galley, Color32::WHITE);
            }

            if canvas_resp.clicked() {
                cmd.push(if state.player.is_playing {
                    StudioCommand::Pause
                } else {
                    StudioCommand::Play
                });
            }

            ui.add_space(6.0);

            // ── Transport bar ────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_3)
                .stroke(Stroke::new(1.0, DARK_BORDER))
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::symmetric(8, 5))
                .show(ui, |ui| {
                    ui.set_height(BAR_H - 10.0);
                    ui.horizontal_centered(|ui| {
                        let playing = state.player.is_playing;
                        if ui.add(tool_btn(if playing { "⏸" } else { "▶" })).clicked() {
                            cmd.push(if playing { StudioCommand::Pause } else { StudioCommand::Play });
                        }

                        ui.label(
                            RichText::new(format!(
                                "{} / {}",
                                format_time(state.player.current_time),
                                format_time(state.player.duration),
                            ))
                            .monospace()
                            .size(12.0)
                            .color(DARK_TEXT_DIM),
                        );

                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            // Rightmost: the volume slider. Shows 0 while
                            // muted; the stored volume itself is untouched.
                            let muted = state.player.is_muted;
                            let mut vol = if muted { 0.0 } else { state.player.volume };
                            let resp = ui.add_sized(
                                [VOL_W, 18.0],
                                egui::Slider::new(&mut vol, 0.0_f32..=1.0)
                                    .step_by(0.1)
                                    .show_value(false)
                                    .trailing_fill(true),
                            );
                            if resp.changed() {
                                cmd.push(StudioCommand::SetVolume(vol));
                            }
                            if ui.add(tool_btn(if muted { "🔇" } else { "🔊" })).clicked() {
                                cmd.push(StudioCommand::ToggleMute);
                            }
                        });
                    });
                });
        });
    }
}
