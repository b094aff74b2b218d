//! Assertions over the JSON envelope printed by `vacfind --format json`.

use anyhow::{Context, Result};
use serde_json::Value;

fn countries(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["countries"]
        .as_array()
        .context("Expected 'content.countries' array in JSON")
}

/// Assert the total number of cities across all country groups.
pub fn assert_total_cities(json: &Value, expected: u64) -> Result<()> {
    let total = json["content"]["total_cities"]
        .as_u64()
        .context("Expected 'content.total_cities' in JSON")?;

    if total != expected {
        anyhow::bail!("Expected {} cities, got {}", expected, total);
    }

    Ok(())
}

/// Assert the country groups, in display order.
pub fn assert_countries(json: &Value, expected: &[&str]) -> Result<()> {
    let names = countries(json)?
        .iter()
        .enumerate()
        .map(|(i, group)| {
            group["country"]
                .as_str()
                .with_context(|| format!("Country group {} missing name", i))
        })
        .collect::<Result<Vec<&str>>>()?;

    if names != expected {
        anyhow::bail!("Expected countries {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert the city names of one country, in table order.
pub fn assert_city_order(json: &Value, country: &str, expected: &[&str]) -> Result<()> {
    let group = countries(json)?
        .iter()
        .find(|group| group["country"] == country)
        .with_context(|| format!("Country {} not in output", country))?;

    let names: Vec<&str> = group["cities"]
        .as_array()
        .with_context(|| format!("Country {} has no 'cities' array", country))?
        .iter()
        .filter_map(|city| city["name"].as_str())
        .collect();

    if names != expected {
        anyhow::bail!(
            "Expected {} cities {:?}, got {:?}",
            country,
            expected,
            names
        );
    }

    Ok(())
}
