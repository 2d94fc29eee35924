use log::LevelFilter;
use simple_logger::SimpleLogger;
use wave_viewer::{
    app::WaveViewerApp,
    constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH},
};

fn main() -> eframe::Result {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("Failed to initialize logger: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| {
            Ok(Box::new(WaveViewerApp::new(cc)?))
        })
    )
}
