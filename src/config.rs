//! Command line and environment configuration for the server.

use std::path::PathBuf;

use clap::Parser;

/// A dashboard and transaction editor for a personal finance data service.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base URL of the finance data service, e.g. "https://finance.example.com/api".
    #[arg(long, env = "FINBOARD_API_URL", required_unless_present = "demo")]
    pub api_url: Option<String>,

    /// Bearer token sent with every request to the data service.
    #[arg(long, env = "FINBOARD_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// The port to serve the app from.
    #[arg(short, long, env = "FINBOARD_PORT", default_value_t = 3000)]
    pub port: u16,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    #[arg(long, env = "FINBOARD_TIMEZONE", default_value = "Etc/UTC")]
    pub timezone: String,

    /// How many transactions the dashboard lists.
    #[arg(long, env = "FINBOARD_RECENT_TRANSACTIONS", default_value_t = 5)]
    pub recent_transactions: usize,

    /// Also write debug logs to this file.
    #[arg(long, env = "FINBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Serve seeded sample data from memory instead of a data service.
    #[arg(long)]
    pub demo: bool,
}
