use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;
use vacfind_runtime::{Config, resolve_endpoint};

use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn show(config_path: &Path, api_url: Option<&str>, format: OutputFormat) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let endpoint = resolve_endpoint(api_url, &config);

    let view_model = presenters::present_config(config_path, &config, endpoint, false);
    ConsoleRenderer::new(format).render(view_model)
}

pub fn set(
    config_path: &Path,
    api_url: Option<String>,
    timeout_secs: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    if api_url.is_none() && timeout_secs.is_none() {
        bail!("Nothing to change: pass --api-url and/or --timeout-secs");
    }

    let mut config = Config::load_from(config_path)?;

    if let Some(url) = api_url {
        let url = url.trim();
        // An empty value clears the setting
        config.api_url = (!url.is_empty()).then(|| url.to_string());
    }
    if let Some(secs) = timeout_secs {
        if secs == 0 {
            bail!("--timeout-secs must be at least 1");
        }
        config.timeout_secs = secs;
    }

    config.save_to(config_path)?;
    info!(path = %config_path.display(), "configuration saved");

    let endpoint = resolve_endpoint(None, &config);
    let view_model = presenters::present_config(config_path, &config, endpoint, true);
    ConsoleRenderer::new(format).render(view_model)
}
