// crates/nuggetcut-ui/src/modules/timeline.rs
use super::StudioModule;
use crate::theme::{DARK_BG_2, DARK_BORDER, DARK_TEXT_DIM, KIND_CLIP, KIND_NUGGET};
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use nuggetcut_core::clip::ClipKind;
use nuggetcut_core::helpers::time::format_time;
use nuggetcut_core::timeline::{clip_span, MARKER_FRACTIONS, SCRUB_STEP};
use nuggetcut_core::{SessionState, StudioCommand};

const TRACK_H: f32 = 44.0;
const LABEL_H: f32 = 16.0;

pub struct TimelineModule {
    /// True between drag start and release on the scrub slider. Live values
    /// emitted mid-drag are previews; the release value is the commit.
    dragging: bool,
    /// Last position (seconds) for which a Seek was emitted.
    ///
    /// Dedupes mid-drag emits: at typical widths many pixels of mouse
    /// movement map to the same 0.1 s bucket, and re-seeking the transport
    /// for each would flood the command queue for no visible change. Reset
    /// to a negative sentinel on construction.
    last_scrub_emitted: f64,
}

impl TimelineModule {
    pub fn new() -> Self {
        Self {
            dragging: false,
            last_scrub_emitted: f64::NEG_INFINITY,
        }
    }
}

impl StudioModule for TimelineModule {
    fn name(&self) -> &str {
        "Timeline"
    }

    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<StudioCommand>) {
        let total = state.player.duration;

        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, TRACK_H + LABEL_H), Sense::hover());
        let track = Rect::from_min_size(rect.min, Vec2::new(width, TRACK_H));
        // `.clone()` gives an owned Painter (Arc-backed) so ui stays free for
        // ui.put() below.
        let painter = ui.painter().clone();

        painter.rect_filled(track, 6.0, DARK_BG_2);
        painter.rect_stroke(track, 6.0, Stroke::new(1.0, DARK_BORDER), egui::StrokeKind::Inside);

        // ── Selected clip extent ─────────────────────────────────────────────
        if let Some(clip) = state.selected() {
            let span = clip_span(clip, total);
            if span.width_frac > 0.0 {
                let band_color = match clip.kind {
                    ClipKind::Nugget => KIND_NUGGET,
                    ClipKind::Clip => KIND_CLIP,
                };
                let band = Rect::from_min_size(
                    Pos2::new(
                        track.min.x + span.start_frac as f32 * track.width(),
                        track.min.y,
                    ),
                    Vec2::new(
                        (span.width_frac as f32 * track.width()).max(2.0),
                        track.height(),
                    ),
                );
                painter.rect_filled(band, 0.0, band_color.linear_multiply(0.22));
                for x in [band.min.x, band.max.x] {
                    painter.line_segment(
                        [Pos2::new(x, band.min.y), Pos2::new(x, band.max.y)],
                        Stroke::new(2.0, band_color),
                    );
                }
            }
        }

        // ── Scrub slider ─────────────────────────────────────────────────────
        if total > 0.0 {
            let slider_rect = track.shrink2(Vec2::new(12.0, 13.0));
            let mut t = state.player.current_time;
            let resp = ui.put(
                slider_rect,
                egui::Slider::new(&mut t, 0.0..=total)
                    .step_by(SCRUB_STEP)
                    .show_value(false)
                    .trailing_fill(true),
            );

            if resp.drag_started() {
                self.dragging = true;
            }
            if resp.changed() {
                if self.dragging {
                    // Live preview while scrubbing; skip sub-step jitter.
                    if (t - self.last_scrub_emitted).abs() >= SCRUB_STEP * 0.5 {
                        cmd.push(StudioCommand::Seek(t));
                        self.last_scrub_emitted = t;
                    }
                } else {
                    // Click-jump commits immediately.
                    cmd.push(StudioCommand::Seek(t));
                    self.last_scrub_emitted = t;
                }
            }
            if resp.drag_stopped() {
                // The release value is always committed, so no earlier live
                // emit can win over it.
                cmd.push(StudioCommand::Seek(t));
                self.last_scrub_emitted = t;
                self.dragging = false;
            }
        } else {
            painter.text(
                track.center(),
                Align2::CENTER_CENTER,
                "waiting for media…",
                FontId::proportional(11.0),
                DARK_TEXT_DIM,
            );
        }

        // ── Time markers ─────────────────────────────────────────────────────
        let label_y = rect.max.y - LABEL_H * 0.5;
        let last = MARKER_FRACTIONS.len() - 1;
        for (i, frac) in MARKER_FRACTIONS.iter().enumerate() {
            let x = track.min.x + *frac as f32 * track.width();
            let align = match i {
                0 => Align2::LEFT_CENTER,
                n if n == last => Align2::RIGHT_CENTER,
                _ => Align2::CENTER_CENTER,
            };
            painter.text(
                Pos2::new(x, label_y),
                align,
                format_time(frac * total),
                FontId::monospace(9.0),
                DARK_TEXT_DIM,
            );
        }
    }
}
