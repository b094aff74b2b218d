use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column a city table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Temperature,
    Rain,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Temperature => "temperature",
            SortKey::Rain => "rain",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "city" => Ok(SortKey::Name),
            "temperature" | "temp" => Ok(SortKey::Temperature),
            "rain" | "rainy-days" => Ok(SortKey::Rain),
            other => Err(format!("Invalid sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Active ordering of one city table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortKey::Name)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_name_ascending() {
        assert_eq!(
            SortSpec::default(),
            SortSpec::new(SortKey::Name, SortDirection::Asc)
        );
    }

    #[test]
    fn test_sort_key_aliases() {
        assert_eq!("temp".parse::<SortKey>(), Ok(SortKey::Temperature));
        assert_eq!("Rainy-Days".parse::<SortKey>(), Ok(SortKey::Rain));
        assert_eq!("city".parse::<SortKey>(), Ok(SortKey::Name));
        assert!("humidity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SortSpec::descending(SortKey::Rain)).unwrap();
        assert_eq!(json, r#"{"key":"rain","direction":"desc"}"#);
    }
}
