use eframe::egui;
use log::{error, info};

use dogtag_egui::backend::EncodingConfig;
use dogtag_egui::ui::DogQrApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Dog Information egui application");

    let config = EncodingConfig::default_path()
        .map(|path| EncodingConfig::load_or_default(&path))
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Dog Information")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Dog Information",
        options,
        Box::new(move |cc| match DogQrApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized Dog Information app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
