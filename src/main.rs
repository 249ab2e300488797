use formdeck::{
    core::FormdeckError,
    gui::{
        settings::{
            data::SETTINGS_FILE,
            SettingsData,
        },
        FormApp,
    },
    persistence::load_json_or_default,
};
use tracing_subscriber::{
    layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
    EnvFilter,
};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formdeck=info"));
    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).with(filter).init();
}

fn main() -> Result<(), FormdeckError> {
    init_logging();

    let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
    tracing::info!(dark_mode = settings.dark_mode, "starting formdeck");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Formdeck")
            .with_inner_size([960.0, 760.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Formdeck",
        options,
        Box::new(|cc| {
            let app = FormApp::new(cc, settings).map_err(|e| e.to_string())?;
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
