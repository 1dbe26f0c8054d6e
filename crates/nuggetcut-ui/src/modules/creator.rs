// crates/nuggetcut-ui/src/modules/creator.rs
use super::StudioModule;
use crate::theme::{
    ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM, ERROR_RED, KIND_NUGGET,
};
use egui::{Align, Color32, Layout, RichText, Stroke, Ui};
use nuggetcut_core::clip::{Clip, ClipError, ClipKind};
use nuggetcut_core::helpers::time::format_time;
use nuggetcut_core::{SessionState, StudioCommand};

/// Form defaults, restored after every successful creation.
const DEFAULT_START: f64 = 0.0;
const DEFAULT_END: f64 = 10.0;

pub struct CreatorModule {
    title:      String,
    start_time: f64,
    end_time:   f64,
    kind:       ClipKind,
    /// Last rejected submission. The pending inputs stay untouched so the
    /// user can correct them.
    error:      Option<ClipError>,
}

impl CreatorModule {
    pub fn new() -> Self {
        Self {
            title:      String::new(),
            start_time: DEFAULT_START,
            end_time:   DEFAULT_END,
            kind:       ClipKind::Clip,
            error:      None,
        }
    }

    fn kind_button(selected: bool, accent: Color32, label: &str) -> egui::Button<'static> {
        egui::Button::new(
            RichText::new(label.to_owned())
                .size(11.0)
                .color(if selected { Color32::BLACK } else { DARK_TEXT_DIM }),
        )
        .fill(if selected { accent } else { DARK_BG_3 })
        .stroke(Stroke::new(1.0, if selected { accent } else { DARK_BORDER }))
        .min_size(egui::vec2(92.0, 26.0))
    }
}

impl StudioModule for CreatorModule {
    fn name(&self) -> &str {
        "Create Clip"
    }

    fn ui(&mut self, ui: &mut Ui, _state: &SessionState, cmd: &mut Vec<StudioCommand>) {
        ui.vertical(|ui| {
            // ── Header ───────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 5, bottom: 5 })
                .show(ui, |ui| {
                    ui.label(RichText::new(format!("✂ {}", self.name())).size(12.0).strong());
                });

            ui.add_space(6.0);

            // ── Kind toggle ──────────────────────────────────────────────────
            ui.label(RichText::new("Clip Type").size(11.0).color(DARK_TEXT_DIM));
            ui.horizontal(|ui| {
                let full = Self::kind_button(self.kind == ClipKind::Clip, ACCENT, "✂  Full Clip");
                if ui.add(full).clicked() {
                    self.kind = ClipKind::Clip;
                }
                let nugget =
                    Self::kind_button(self.kind == ClipKind::Nugget, KIND_NUGGET, "⚡  Nugget");
                if ui.add(nugget).clicked() {
                    self.kind = ClipKind::Nugget;
                }
            });
            ui.label(
                RichText::new(match self.kind {
                    ClipKind::Clip => "Create a longer video clip for detailed content",
                    ClipKind::Nugget => {
                        "Create a short nugget for quick highlights (recommended: under 30 seconds)"
                    }
                })
                .size(10.0)
                .color(DARK_TEXT_DIM),
            );

            ui.add_space(6.0);

            // ── Title ────────────────────────────────────────────────────────
            ui.label(RichText::new("Title").size(11.0).color(DARK_TEXT_DIM));
            ui.add(
                egui::TextEdit::singleline(&mut self.title)
                    .hint_text("Enter clip title…")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);

            // ── Time inputs ──────────────────────────────────────────────────
            ui.columns(2, |cols| {
                cols[0].label(RichText::new("Start Time (seconds)").size(11.0).color(DARK_TEXT_DIM));
                cols[0].add(
                    egui::DragValue::new(&mut self.start_time)
                        .speed(0.1)
                        .range(0.0..=86_400.0)
                        .fixed_decimals(1),
                );
                cols[0].label(
                    RichText::new(format_time(self.start_time))
                        .monospace()
                        .size(10.0)
                        .color(DARK_TEXT_DIM),
                );

                cols[1].label(RichText::new("End Time (seconds)").size(11.0).color(DARK_TEXT_DIM));
                cols[1].add(
                    egui::DragValue::new(&mut self.end_time)
                        .speed(0.1)
                        .range(0.0..=86_400.0)
                        .fixed_decimals(1),
                );
                cols[1].label(
                    RichText::new(format_time(self.end_time))
                        .monospace()
                        .size(10.0)
                        .color(DARK_TEXT_DIM),
                );
            });

            ui.add_space(6.0);

            // ── Duration readout ─────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Duration:").size(11.0).color(DARK_TEXT_DIM));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let d = self.end_time - self.start_time;
                            let text = if d > 0.0 { format_time(d) } else { "—".to_string() };
                            ui.label(RichText::new(text).monospace().size(11.0).color(ACCENT));
                        });
                    });
                });

            // ── Validation banner ────────────────────────────────────────────
            if let Some(err) = &self.error {
                egui::Frame::new()
                    .fill(ERROR_RED.linear_multiply(0.15))
                    .stroke(Stroke::new(1.0, ERROR_RED))
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.label(RichText::new(format!("⚠ {err}")).size(11.0).color(ERROR_RED));
                    });
            }

            ui.add_space(6.0);

            // ── Create ───────────────────────────────────────────────────────
            let label = match self.kind {
                ClipKind::Clip => "➕ Create Clip",
                ClipKind::Nugget => "➕ Create Nugget",
            };
            let create = egui::Button::new(RichText::new(label).size(12.0).color(Color32::WHITE))
                .fill(ACCENT)
                .min_size(egui::vec2(ui.available_width(), 30.0));
            if ui.add(create).clicked() {
                match Clip::new(&self.title, self.start_time, self.end_time, self.kind) {
                    Ok(clip) => {
                        cmd.push(StudioCommand::AddClip(clip));
                        // Reset the form for the next segment.
                        self.title.clear();
                        self.start_time = DEFAULT_START;
                        self.end_time = DEFAULT_END;
                        self.error = None;
                    }
                    Err(err) => {
                        // Inputs are left as typed.
                        self.error = Some(err);
                    }
                }
            }
        });
    }
}
