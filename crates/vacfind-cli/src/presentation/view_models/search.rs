use serde::Serialize;
use std::fmt;
use vacfind_types::{Month, SortSpec};

#[derive(Debug, Serialize)]
pub struct SearchResultsViewModel {
    pub criteria: CriteriaViewModel,
    pub summary: String,
    pub total_cities: usize,
    pub country_count: usize,
    pub countries: Vec<CountryViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CriteriaViewModel {
    pub min_temp: f64,
    pub max_temp: f64,
    pub month: Month,
    pub max_rainy_days: u32,
}

/// One country header plus its table.
///
/// `cities` holds rows only while the country is expanded, in the table's sort order;
/// a collapsed country reports just its header and `city_count`.
#[derive(Debug, Serialize)]
pub struct CountryViewModel {
    pub country: String,
    pub city_count: usize,
    pub label: String,
    pub expanded: bool,
    pub sort: SortSpec,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cities: Vec<CityRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CityRowViewModel {
    pub name: String,
    pub average_temperature: f64,
    pub rainy_days: u32,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub path: String,
    pub rows: usize,
}

impl fmt::Display for SearchResultsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::search::SearchResultsView;
        write!(f, "{}", SearchResultsView::new(self))
    }
}
