//! Tic-tac-toe GUI
//!
//! A graphical interface for playing tic-tac-toe with move history.

use clap::Parser;
use tictactoe::config::{AppConfig, Cli, DEFAULT_LOG_FILTER};
use tictactoe::ui::TicTacToeApp;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(config: &AppConfig) {
    let filter = config
        .log_filter
        .as_deref()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<(), eframe::Error> {
    let config = AppConfig::from(Cli::parse());
    init_tracing(&config);

    tracing::info!(ascending = config.ascending, "Tic-tac-toe starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )
}
