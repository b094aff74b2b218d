use std::path::Path;
use vacfind_runtime::Config;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    config_path: &Path,
    config: &Config,
    endpoint: String,
    saved: bool,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        config_path: config_path.display().to_string(),
        api_url: config.api_url.clone(),
        endpoint,
        timeout_secs: config.timeout_secs,
    };

    let mut result = CommandResultViewModel::new(content);
    if saved {
        result = result.with_badge(StatusBadge::success("Configuration saved"));
    } else if config.api_url.is_none() {
        result = result.with_suggestion(
            Guidance::new("Point searches at your lookup service")
                .with_command(cmd::CONFIG_SET_API_URL),
        );
    }

    result
}
