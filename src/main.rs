#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;
mod load;
mod qr;
mod store;

use eframe::egui;

use crate::gui::{GalleryApp, WINDOW_SIZE};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_SIZE.0, WINDOW_SIZE.1])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Image Gallery",
        options,
        Box::new(|cc| {
            let mut app = GalleryApp::new(cc.egui_ctx.clone());
            app.restore_gallery();
            Ok(Box::new(app))
        }),
    )
}
