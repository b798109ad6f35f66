use std::path::PathBuf;

use clap::Parser;

/// CSV file loaded when no path is given on the command line.
pub const DEFAULT_CSV_PATH: &str = "Amazon Marketing Sample Jan 2020.csv";

/// Startup options of the `inventory` binary.
///
/// Log filtering is left to `RUST_LOG`, read by `env_logger`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "inventory", about = "Product catalog lookup over a CSV export", version)]
pub struct Config {
    /// CSV export to load
    #[arg(default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,
}
