use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Lookup service used when nothing else is configured (local development server)
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CITIES_PATH: &str = "/cities";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VACFIND_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.vacfind (fallback for systems without one)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("VACFIND_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("vacfind"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".vacfind"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or platform data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Resolve the full `/cities` endpoint based on priority:
/// 1. Explicit URL (e.g. `--api-url`)
/// 2. VACFIND_API_URL environment variable
/// 3. `api_url` from the config file
/// 4. [`DEFAULT_API_URL`]
///
/// Blank values at any level count as unset.
pub fn resolve_endpoint(explicit: Option<&str>, config: &Config) -> String {
    let env_url = std::env::var("VACFIND_API_URL").ok();
    normalize_endpoint(select_base(explicit, env_url.as_deref(), config))
}

fn select_base<'a>(
    explicit: Option<&'a str>,
    env_url: Option<&'a str>,
    config: &'a Config,
) -> &'a str {
    let non_blank = |value: &&str| !value.trim().is_empty();
    explicit
        .filter(non_blank)
        .or(env_url.filter(non_blank))
        .or(config.api_url.as_deref().filter(non_blank))
        .unwrap_or(DEFAULT_API_URL)
}

/// A bare host means the hosted HTTPS deployment; the `/cities` route is appended once
fn normalize_endpoint(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let with_scheme = if base.contains("://") {
        base.to_string()
    } else {
        format!("https://{}", base)
    };

    if with_scheme.ends_with(CITIES_PATH) {
        with_scheme
    } else {
        format!("{}{}", with_scheme, CITIES_PATH)
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL or host of the lookup service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Give up on a lookup after this many seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.timeout_secs == 0 {
            return Err(Error::Config(format!(
                "timeout_secs must be at least 1 (in {})",
                path.display()
            )));
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_data_dir(None)?.join("config.toml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
