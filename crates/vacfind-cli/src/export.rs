use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use vacfind_engine::{GroupedResults, TableSorts, sorted_cities};

const HEADER: [&str; 4] = ["country", "city", "temperature", "rain"];

/// Write every city as CSV: countries in display order, each table in its current sort order.
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(writer: W, results: &GroupedResults, sorts: &TableSorts) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    let mut rows = 0;
    for group in &results.groups {
        for city in sorted_cities(&group.cities, sorts.spec_for(&group.country)) {
            wtr.write_record([
                city.country.as_str(),
                city.name.as_str(),
                &city.average_temperature.to_string(),
                &city.rainy_days.to_string(),
            ])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

pub fn write_csv_file(path: &Path, results: &GroupedResults, sorts: &TableSorts) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    write_csv(file, results, sorts)
}
