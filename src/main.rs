mod app;
mod config;
mod domain;
mod infra;
mod observability;
mod ui;
mod usecase;


use std::process::ExitCode;

use crate::config::AppConfig;
use crate::observability::init_logging;

pub const PAGE_SIZE: usize = 6;

pub fn app_config() -> AppConfig {
    AppConfig::default()
}

fn main() -> ExitCode {
    let config = app_config();
    init_logging(config.log_format);

    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "invalid configuration");
        return ExitCode::FAILURE;
    }

    tracing::info!(page_size = config.page_size, "starting dashboard");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new().with_title(config.window_title.as_str()),
            ),
        )
        .launch(app::App);

    ExitCode::SUCCESS
}
