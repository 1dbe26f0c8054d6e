#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod helpers;
mod modules;
mod theme;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("🎬 NuggetCut")
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([960.0, 620.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "NuggetCut",
        native_options,
        Box::new(|cc| Ok(Box::new(app::NuggetCutApp::new(cc)))),
    )
}
