use std::fs;
use std::path::Path;
use vacfind_engine::*;
use vacfind_types::{CityRecord, LookupResponse, SortKey, SortSpec};

fn load_fixture(name: &str) -> LookupResponse {
    let path = Path::new("tests/fixtures").join(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()));
    LookupResponse::from_json(&content)
        .unwrap_or_else(|_| panic!("Failed to parse fixture: {}", path.display()))
}

// Plain-text outline of what a reader would see: headers for every country,
// rows only under expanded ones, each table in its own order.
fn outline(results: &GroupedResults, expansion: &ExpansionState, sorts: &TableSorts) -> String {
    let mut lines = Vec::new();
    for group in &results.groups {
        let expanded = expansion.is_expanded(&group.country);
        lines.push(format!(
            "{} {} ({})",
            if expanded { "▾" } else { "▸" },
            group.country,
            city_count_label(group.len())
        ));
        if expanded {
            for city in sorted_cities(&group.cities, sorts.spec_for(&group.country)) {
                lines.push(format!(
                    "    {} {} {}",
                    city.name, city.average_temperature, city.rainy_days
                ));
            }
        }
    }
    lines.join("\n")
}

#[test]
fn test_fixture_grouping_summary() {
    let results = group_response(load_fixture("july_warm.json"));

    assert_eq!(results.country_count, 3);
    assert_eq!(results.total_cities, 8);
    assert_eq!(
        summary_line(&results),
        "Found the following 8 cities in 3 countries."
    );

    let countries: Vec<&str> = results.countries().collect();
    assert_eq!(countries, vec!["Brasil", "Canada", "USA"]);
}

#[test]
fn test_every_city_lands_in_exactly_one_group() {
    let results = group_response(load_fixture("july_warm.json"));

    let mut seen: Vec<(String, String)> = results
        .groups
        .iter()
        .flat_map(|group| {
            group
                .cities
                .iter()
                .map(|city| (city.country.clone(), city.name.clone()))
        })
        .collect();
    let before = seen.len();
    seen.sort();
    seen.dedup();

    assert_eq!(before, results.total_cities);
    assert_eq!(seen.len(), before);
    for group in &results.groups {
        assert!(group.cities.iter().all(|c| c.country == group.country));
    }
}

#[test]
fn test_browsing_session_outline() {
    let results = group_response(load_fixture("july_warm.json"));
    let mut expansion = ExpansionState::new();
    let mut sorts = TableSorts::new();
    for country in results.countries() {
        expansion.observe(country);
    }

    expansion.toggle("USA");
    sorts.click("USA", SortKey::Temperature);

    insta::assert_snapshot!(outline(&results, &expansion, &sorts), @r"
▸ Brasil (3 Cities)
▸ Canada (2 Cities)
▾ USA (3 Cities)
    Los Angeles 22.1 0
    New York 24.9 8
    Chicago 24.9 9
");

    sorts.click("USA", SortKey::Temperature);
    expansion.toggle("Brasil");

    insta::assert_snapshot!(outline(&results, &expansion, &sorts), @r"
▾ Brasil (3 Cities)
    brasília 19.7 0
    Salvador 23.9 17
    São Paulo 17.1 4
▸ Canada (2 Cities)
▾ USA (3 Cities)
    New York 24.9 8
    Chicago 24.9 9
    Los Angeles 22.1 0
");
}

#[test]
fn test_sorting_never_reorders_canonical_results() {
    let results = group_response(load_fixture("july_warm.json"));
    let usa = results.group("USA").unwrap();
    let before: Vec<CityRecord> = usa.cities.clone();

    let _ = sorted_cities(&usa.cities, SortSpec::descending(SortKey::Rain));

    assert_eq!(usa.cities, before);
}

#[test]
fn test_resorting_does_not_touch_expansion() {
    let results = group_response(load_fixture("july_warm.json"));
    let mut expansion = ExpansionState::new();
    let mut sorts = TableSorts::new();
    expansion.toggle("Canada");

    for key in [SortKey::Rain, SortKey::Rain, SortKey::Name] {
        sorts.click("Canada", key);
    }

    assert!(expansion.is_expanded("Canada"));
    assert!(!expansion.is_expanded("USA"));
    assert_eq!(sorts.spec_for("Canada"), SortSpec::ascending(SortKey::Name));
    assert_eq!(results.group("Canada").unwrap().len(), 2);
}
