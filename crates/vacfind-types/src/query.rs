use serde::{Deserialize, Serialize};
use std::fmt;

/// Search form field, used to attribute validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    MinTemp,
    MaxTemp,
    Month,
    MaxRainyDays,
}

impl Field {
    /// Query-parameter spelling of the field
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::MinTemp => "minTemp",
            Field::MaxTemp => "maxTemp",
            Field::Month => "month",
            Field::MaxRainyDays => "maxRainyDays",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::MinTemp => "Minimum temperature",
            Field::MaxTemp => "Maximum temperature",
            Field::Month => "Month",
            Field::MaxRainyDays => "Maximum rainy days",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Search fields exactly as the user entered them, before validation.
///
/// `None` and an empty string are equivalent: the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery {
    pub min_temp: Option<String>,
    pub max_temp: Option<String>,
    pub month: Option<String>,
    pub max_rainy_days: Option<String>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_temp(mut self, value: impl Into<String>) -> Self {
        self.min_temp = Some(value.into());
        self
    }

    pub fn max_temp(mut self, value: impl Into<String>) -> Self {
        self.max_temp = Some(value.into());
        self
    }

    pub fn month(mut self, value: impl Into<String>) -> Self {
        self.month = Some(value.into());
        self
    }

    pub fn max_rainy_days(mut self, value: impl Into<String>) -> Self {
        self.max_rainy_days = Some(value.into());
        self
    }
}
