use clap::{Args, Subcommand};
use std::path::PathBuf;
use vacfind_types::RawQuery;

use crate::types::SortColumn;

#[derive(Subcommand)]
pub enum Commands {
    /// Search cities by temperature range, month and rainy days
    Search(SearchArgs),

    /// List accepted month names
    Months,

    /// Show or change the lookup configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Lowest acceptable average temperature (°C)
    #[arg(long, allow_hyphen_values = true)]
    pub min_temp: Option<String>,

    /// Highest acceptable average temperature (°C)
    #[arg(long, allow_hyphen_values = true)]
    pub max_temp: Option<String>,

    /// Travel month, full name or three-letter abbreviation
    #[arg(long)]
    pub month: Option<String>,

    /// Most rainy days tolerated in the month (0-31, default 0)
    #[arg(long, allow_hyphen_values = true)]
    pub max_rainy_days: Option<String>,

    /// Click a column header in every table; repeat to toggle direction
    #[arg(long, value_enum)]
    pub sort: Vec<SortColumn>,

    /// Click a country header; repeat to collapse again
    #[arg(long)]
    pub expand: Vec<String>,

    /// Expand every country
    #[arg(long)]
    pub expand_all: bool,

    /// Write all cities, in table order, to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl SearchArgs {
    pub fn raw_query(&self) -> RawQuery {
        RawQuery {
            min_temp: self.min_temp.clone(),
            max_temp: self.max_temp.clone(),
            month: self.month.clone(),
            max_rainy_days: self.max_rainy_days.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Update config.toml in the data directory
    Set {
        #[arg(long)]
        api_url: Option<String>,

        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
