// crates/nuggetcut-ui/src/app.rs
use crate::modules::{
    creator::CreatorModule, library::LibraryModule, player::PlayerModule,
    timeline::TimelineModule, StudioModule,
};
use crate::nugget_log;
use crate::theme::{configure_style, ACCENT};
use eframe::egui;
use nuggetcut_core::{SessionState, StudioCommand};
use nuggetcut_media::{MediaSource, MediaWorker};

// ── App ───────────────────────────────────────────────────────────────────────

pub struct NuggetCutApp {
    /// Single source of truth. Modules read it shared and mutate only
    /// through commands.
    state:        SessionState,
    media:        MediaWorker,
    // Panel modules as concrete types — typos become compile errors instead
    // of silently blank panels.
    player:       PlayerModule,
    timeline:     TimelineModule,
    creator:      CreatorModule,
    library:      LibraryModule,
    /// Commands emitted by modules each frame, processed after the UI pass.
    pending_cmds: Vec<StudioCommand>,
}

impl NuggetCutApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting our theme on OS
        // light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let media = MediaWorker::new();
        let source = MediaSource::sample();
        nugget_log!("[app] loading source {} ({:.1}s)", source.url, source.duration);
        media.load(source);

        Self {
            state:        SessionState::default(),
            media,
            player:       PlayerModule,
            timeline:     TimelineModule::new(),
            creator:      CreatorModule::new(),
            library:      LibraryModule,
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: StudioCommand) {
        match cmd {
            // ── Playback ─────────────────────────────────────────────────────
            StudioCommand::Play => {
                self.state.playback_error = None;
                let intent = self.state.player.begin_play();
                self.media.play(intent);
            }
            StudioCommand::Pause => {
                self.state.player.pause();
                self.media.pause();
            }
            StudioCommand::Seek(seconds) => {
                self.state.player.seek(seconds);
                self.media.seek(seconds);
            }
            StudioCommand::SetVolume(volume) => {
                self.state.player.set_volume(volume);
                self.media.set_volume(self.state.player.volume);
            }
            StudioCommand::ToggleMute => {
                self.state.player.toggle_mute();
                self.media.set_muted(self.state.player.is_muted);
            }
            StudioCommand::DismissPlaybackError => {
                self.state.playback_error = None;
            }

            // ── Clips ────────────────────────────────────────────────────────
            StudioCommand::AddClip(clip) => {
                nugget_log!(
                    "[library] created {} '{}' ({:.1}s)",
                    clip.kind.label(),
                    clip.title,
                    clip.duration
                );
                self.state.add_clip(clip);
            }
            StudioCommand::DeleteClip(id) => {
                self.state.remove_clip(id);
            }
            StudioCommand::SelectClip(id) => {
                // A selection *change* cues the player to the clip start;
                // re-selecting the current clip is a no-op. Playback start
                // stays a separate user action.
                if self.state.selected_clip != id {
                    self.state.select_clip(id);
                    if let Some(start) = self.state.selected().map(|c| c.start_time) {
                        self.state.player.seek(start);
                        self.media.seek(start);
                    }
                }
            }
        }
    }

    /// Drain worker notifications into the player state machine. These are
    /// one-way observations; only a failed play request produces anything to
    /// surface.
    fn poll_media(&mut self) {
        while let Ok(event) = self.media.events.try_recv() {
            if let Some(err) = self.state.player.apply(&event) {
                nugget_log!("[player] {err}");
                self.state.playback_error = Some(err.to_string());
            }
        }
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for NuggetCutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_media();

        egui::TopBottomPanel::top("header")
            .exact_height(40.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("🎬 NuggetCut")
                            .strong()
                            .size(16.0)
                            .color(ACCENT),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new("Create clips and nuggets from your videos")
                            .size(12.0)
                            .weak(),
                    );
                });
            });

        egui::SidePanel::right("library_panel")
            .resizable(true)
            .default_width(320.0)
            .min_width(260.0)
            .show(ctx, |ui| {
                self.library.ui(ui, &self.state, &mut self.pending_cmds);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.player.ui(ui, &self.state, &mut self.pending_cmds);
                ui.add_space(8.0);
                self.timeline.ui(ui, &self.state, &mut self.pending_cmds);
                ui.add_space(8.0);
                self.creator.ui(ui, &self.state, &mut self.pending_cmds);
            });
        });

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<StudioCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }

        if self.state.player.is_playing {
            // Position notifications arrive between frames; keep painting.
            ctx.request_repaint_after(std::time::Duration::from_millis(33));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.media.shutdown();
    }
}
