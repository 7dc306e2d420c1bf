pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod router;
pub mod supabase;
pub mod theme;

use anyhow::{anyhow, Result};
use eframe::{self, egui};

pub use api::ApiClient;
pub use app::DevhubApp;
pub use config::FrontendConfig;

/// Loads configuration and launches the egui application with default
/// window options.
pub fn run_frontend() -> Result<()> {
    run_frontend_with_options(default_native_options())
}

/// Launches the egui app with caller-provided options.
pub fn run_frontend_with_options(options: eframe::NativeOptions) -> Result<()> {
    let _ = env_logger::builder().is_test(false).try_init();
    let config = FrontendConfig::load()?;
    let api = ApiClient::new(&config)?;
    log::info!("using managed store at {}", config.supabase_url);
    eframe::run_native(
        "devhub",
        options,
        Box::new(move |cc| Ok(Box::new(DevhubApp::new(cc, api, config)))),
    )
    .map_err(|err| anyhow!(err.to_string()))
}

fn default_native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    }
}
