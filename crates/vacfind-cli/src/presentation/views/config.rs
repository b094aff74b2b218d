use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config file: {}", self.data.config_path)?;
        writeln!(
            f,
            "API URL:     {}",
            self.data.api_url.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "Endpoint:    {}", self.data.endpoint)?;
        writeln!(f, "Timeout:     {}s", self.data.timeout_secs)
    }
}
