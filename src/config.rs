//! Application configuration from command-line flags

use clap::Parser;

/// Default log filter when neither `--log` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "tictactoe=info";

/// Tic-tac-toe with move history and time travel.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe with a navigable move history")]
pub struct Cli {
    /// Start with the move list in descending order.
    #[arg(long)]
    pub descending: bool,

    /// Log filter, e.g. `tictactoe=debug`. Overrides RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,

    /// Initial window width.
    #[arg(long, default_value = "720")]
    pub width: f32,

    /// Initial window height.
    #[arg(long, default_value = "480")]
    pub height: f32,
}

/// Settings the GUI starts with
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub title: String,
    /// Initial move-list order
    pub ascending: bool,
    /// Explicit log filter; `None` defers to `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [720.0, 480.0],
            min_window_size: [480.0, 360.0],
            title: "Tic-Tac-Toe".to_string(),
            ascending: true,
            log_filter: None,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let defaults = AppConfig::default();
        Self {
            window_size: [
                cli.width.max(defaults.min_window_size[0]),
                cli.height.max(defaults.min_window_size[1]),
            ],
            ascending: !cli.descending,
            log_filter: cli.log,
            ..defaults
        }
    }
}
