use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use vacfind_types::{CityRecord, SortDirection, SortKey, SortSpec};

use crate::collate::collate;

/// Column-header click: same key flips direction, a new key starts ascending
pub fn toggle(current: SortSpec, clicked: SortKey) -> SortSpec {
    if current.key == clicked {
        SortSpec::new(clicked, current.direction.flip())
    } else {
        SortSpec::ascending(clicked)
    }
}

/// Total order over city records for the given spec.
///
/// Equal keys compare `Equal`; callers rely on a stable sort to keep input order.
pub fn compare_cities(spec: SortSpec, a: &CityRecord, b: &CityRecord) -> Ordering {
    let ordering = match spec.key {
        SortKey::Name => collate(&a.name, &b.name),
        SortKey::Temperature => a.average_temperature.total_cmp(&b.average_temperature),
        SortKey::Rain => a.rainy_days.cmp(&b.rainy_days),
    };

    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Sorted copy of `cities`; the input slice is left untouched
pub fn sorted_cities(cities: &[CityRecord], spec: SortSpec) -> Vec<CityRecord> {
    let mut sorted = cities.to_vec();
    sorted.sort_by(|a, b| compare_cities(spec, a, b));
    sorted
}

/// Independent sort state for every country table, keyed by country name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableSorts {
    specs: HashMap<String, SortSpec>,
}

impl TableSorts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current spec for a table; tables never clicked sort by name ascending
    pub fn spec_for(&self, country: &str) -> SortSpec {
        self.specs.get(country).copied().unwrap_or_default()
    }

    /// Apply a header click to one country's table and return its new spec
    pub fn click(&mut self, country: &str, key: SortKey) -> SortSpec {
        let next = toggle(self.spec_for(country), key);
        self.specs.insert(country.to_string(), next);
        next
    }

    /// Forget tables whose country is no longer displayed
    pub fn retain<'a>(&mut self, countries: impl IntoIterator<Item = &'a str>) {
        let keep: Vec<&str> = countries.into_iter().collect();
        self.specs.retain(|country, _| keep.contains(&country.as_str()));
    }
}
