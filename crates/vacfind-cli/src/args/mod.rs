// NOTE: Command Organization
//
// `search` is the whole product; `months` and `config` support it.
// Search fields are taken as raw text so that every value, including a
// missing one, reaches the same validator a form submit would.

mod commands;
pub mod hints;

pub use commands::*;

use clap::Parser;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "vacfind")]
#[command(about = "Find cities whose monthly climate matches your trip", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (default: $VACFIND_PATH or the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Lookup service base URL or host (overrides $VACFIND_API_URL and config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
