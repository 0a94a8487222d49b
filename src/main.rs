use eframe::egui;
use netiquette_master::QuizApp;
use netiquette_master::config::Config;

fn main() -> eframe::Result<()> {
    // Primero el .env, así RUST_LOG también puede venir de ahí
    let config = Config::load();
    pretty_env_logger::init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Konfiguration konnte nicht geladen werden: {e}");
            std::process::exit(1);
        }
    };
    if config.api_key.is_none() {
        log::warn!("no GEMINI_API_KEY set, only a cached set can be played");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Netiquette Master 100")
            .with_inner_size([900.0, 780.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Netiquette Master 100",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::from_creation_context(cc, config)))),
    )
}
