use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    /// Value stored in config.toml, if any
    pub api_url: Option<String>,
    /// Endpoint a search would call right now, after flags and environment
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::config::ConfigView;
        write!(f, "{}", ConfigView::new(self))
    }
}
