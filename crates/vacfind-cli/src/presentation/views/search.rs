use std::fmt;
use vacfind_types::{SortDirection, SortKey};

use crate::presentation::view_models::{CountryViewModel, SearchResultsViewModel};

const INDENT: &str = "    ";
const COLUMNS: [(SortKey, &str); 3] = [
    (SortKey::Name, "City"),
    (SortKey::Temperature, "Temp (°C)"),
    (SortKey::Rain, "Rainy days"),
];

pub struct SearchResultsView<'a> {
    data: &'a SearchResultsViewModel,
}

impl<'a> SearchResultsView<'a> {
    pub fn new(data: &'a SearchResultsViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for SearchResultsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.summary)?;

        if !self.data.countries.is_empty() {
            writeln!(f)?;
        }
        for country in &self.data.countries {
            let marker = if country.expanded { "▾" } else { "▸" };
            writeln!(f, "{} {} ({})", marker, country.country, country.label)?;
            if country.expanded {
                write!(f, "{}", CityTableView::new(country))?;
            }
        }

        if let Some(export) = &self.data.export {
            writeln!(f)?;
            writeln!(f, "Exported {} cities to {}", export.rows, export.path)?;
        }

        Ok(())
    }
}

/// Table of one expanded country; the active sort column carries ▲ or ▼
pub struct CityTableView<'a> {
    data: &'a CountryViewModel,
}

impl<'a> CityTableView<'a> {
    pub fn new(data: &'a CountryViewModel) -> Self {
        Self { data }
    }

    fn heading(&self, key: SortKey, title: &str) -> String {
        if self.data.sort.key != key {
            return title.to_string();
        }
        let arrow = match self.data.sort.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        };
        format!("{} {}", title, arrow)
    }
}

impl fmt::Display for CityTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let headings: Vec<String> = COLUMNS
            .iter()
            .map(|(key, title)| self.heading(*key, title))
            .collect();
        let rows: Vec<[String; 3]> = self
            .data
            .cities
            .iter()
            .map(|city| {
                [
                    city.name.clone(),
                    format!("{:.1}", city.average_temperature),
                    city.rainy_days.to_string(),
                ]
            })
            .collect();

        let width = |column: usize| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(headings[column].chars().count()))
                .max()
                .unwrap_or(0)
        };
        let (name_width, temp_width) = (width(0), width(1));

        writeln!(
            f,
            "{INDENT}{:<name_width$}  {:<temp_width$}  {}",
            headings[0], headings[1], headings[2]
        )?;
        for row in &rows {
            writeln!(
                f,
                "{INDENT}{:<name_width$}  {:<temp_width$}  {}",
                row[0], row[1], row[2]
            )?;
        }

        Ok(())
    }
}
