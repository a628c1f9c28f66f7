use egui::ViewportBuilder;

use micado_core::MicadoApp;
use micado_core::platform::parameters::gui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("micado", log::LevelFilter::Info)
        .filter_module("micado_core", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    eframe::run_native(
        gui::APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default().with_inner_size([gui::VIEWPORT_X, gui::VIEWPORT_Y]),
            ..Default::default()
        },
        Box::new(|_cc| {
            let app = MicadoApp::new()?;
            log::info!("Current settings file: {}", app.store.current_path().display());
            Ok(Box::new(app))
        }),
    )
}
