use serde::Serialize;
use std::collections::BTreeMap;

/// Which country groups are expanded, addressed by country name.
///
/// Every country starts collapsed. Flags change only through an explicit toggle
/// (or `expand_all`), never as a side effect of sorting or re-rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpansionState {
    flags: BTreeMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a country's group has been rendered; new countries start collapsed
    pub fn observe(&mut self, country: &str) {
        self.flags.entry(country.to_string()).or_insert(false);
    }

    pub fn is_expanded(&self, country: &str) -> bool {
        self.flags.get(country).copied().unwrap_or(false)
    }

    /// Flip one country's flag and return its new value
    pub fn toggle(&mut self, country: &str) -> bool {
        let flag = self.flags.entry(country.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Copy of this state with one country flipped
    #[must_use]
    pub fn toggled(&self, country: &str) -> Self {
        let mut next = self.clone();
        next.toggle(country);
        next
    }

    pub fn expand_all<'a>(&mut self, countries: impl IntoIterator<Item = &'a str>) {
        for country in countries {
            self.flags.insert(country.to_string(), true);
        }
    }

    pub fn expanded_countries(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(country, _)| country.as_str())
    }

    /// Whether the country has been rendered at least once
    pub fn is_known(&self, country: &str) -> bool {
        self.flags.contains_key(country)
    }

    /// Drop flags for countries that are no longer displayed
    pub fn retain<'a>(&mut self, countries: impl IntoIterator<Item = &'a str>) {
        let keep: Vec<&str> = countries.into_iter().collect();
        self.flags.retain(|country, _| keep.contains(&country.as_str()));
    }
}
