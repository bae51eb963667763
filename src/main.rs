use std::env;

use eframe::egui;
use talentmatch::{
    api::DEFAULT_API_URL,
    core::tasks::TaskManager,
    gui::settings::{
        SettingsData,
        API_URL_ENV,
        SETTINGS_FILE,
    },
    persistence::load_json_or_default,
    ApiClient,
    TalentMatchApp,
};
use tracing::{
    info,
    warn,
};
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentMatch v{}", env!("CARGO_PKG_VERSION"));

    let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
    let env_api_url = env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty());

    let api_url = settings_data.resolved_api_url(env_api_url.as_deref());
    let api = match ApiClient::new(&api_url, settings_data.request_timeout()) {
        Ok(api) => api,
        Err(e) => {
            warn!("{e}. Falling back to {DEFAULT_API_URL}");
            ApiClient::new(DEFAULT_API_URL, settings_data.request_timeout())?
        }
    };
    let task_manager = TaskManager::new(api)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TalentMatch AI")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TalentMatch AI",
        options,
        Box::new(move |cc| {
            Ok(Box::new(TalentMatchApp::new(cc, settings_data, env_api_url, task_manager)))
        }),
    )?;

    Ok(())
}
