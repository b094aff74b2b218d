use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use anyhow::{Context, Result};
use tracing::debug;
use vacfind_runtime::{Config, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = data_dir.join("config.toml");
    debug!(path = %config_path.display(), "using config file");

    match cli.command {
        Commands::Search(args) => {
            let config = Config::load_from(&config_path)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;

            runtime.block_on(handlers::search::handle(
                &args,
                &config,
                cli.api_url.as_deref(),
                cli.format,
            ))
        }

        Commands::Months => handlers::months::handle(cli.format),

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                handlers::config::show(&config_path, cli.api_url.as_deref(), cli.format)
            }
            ConfigCommand::Set {
                api_url,
                timeout_secs,
            } => handlers::config::set(&config_path, api_url, timeout_secs, cli.format),
        },
    }
}
