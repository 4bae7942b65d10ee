use eframe::egui;

use super::constants::WINDOW_TITLE;

pub fn native_options() -> eframe::NativeOptions {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([640.0, 480.0])
        .with_min_inner_size([420.0, 320.0])
        .with_title(WINDOW_TITLE);

    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}
