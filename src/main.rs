use anyhow::{Context, Result, anyhow};
use eframe::egui;

use launch_dashboard::app::{DASHBOARD_TITLE, LaunchDashboardApp};
use launch_dashboard::config::DashboardConfig;
use launch_dashboard::data::loader::load_file;
use launch_dashboard::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::debug!("Starting with {config:?}");

    // The dashboard never starts without its dataset.
    let table = load_file(&config.data_path)
        .with_context(|| format!("cannot start without {}", config.data_path.display()))?;
    let state = AppState::new(table, &config.slider);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(DASHBOARD_TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        DASHBOARD_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
