use anyhow::{Context, Result};
use std::sync::Arc;
use yourtasks::backend::RestBackend;
use yourtasks::config::Config;
use yourtasks::controller::TaskListState;
use yourtasks::logger::Logger;
use yourtasks::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(&path);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    logger.log(format!("Using task service at {}", config.api.base_url));

    let backend = RestBackend::new(config.api.base_url.clone()).context("Failed to create HTTP client")?;
    let state = TaskListState::with_preferences(config.ui.default_filter, config.ui.dark_mode);

    // Run the TUI application
    ui::run_app(Arc::new(backend), state, logger).await?;

    Ok(())
}
