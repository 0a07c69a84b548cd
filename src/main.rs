use eframe::egui;
use retroboard::gui::RetroApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Retroboard"),
        ..Default::default()
    };

    eframe::run_native("Retroboard", options, Box::new(|cc| Ok(Box::new(RetroApp::new(cc)))))
}
