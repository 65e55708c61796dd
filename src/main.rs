mod app;
mod color;
mod data;
mod state;
mod ui;

use app::TitanicLensApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // The whole dashboard derives from this one dataset; a failed load is
    // fatal to startup.
    let dataset = match data::loader::load() {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("dataset unavailable: {e}");
            eprintln!("titanic-lens: dataset unavailable: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "dataset ready: {} passengers, age domain {:?}",
        dataset.len(),
        dataset.age_domain
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Titanic Lens – Passenger Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(TitanicLensApp::new(AppState::new(dataset))))),
    )
}
