use vacfind::presentation::ConsoleRenderer;
use vacfind::presentation::presenters::{SearchDisplay, present_months, present_search_results};
use vacfind::types::OutputFormat;
use vacfind_engine::{ExpansionState, GroupedResults, TableSorts, group_records, validate};
use vacfind_types::{CityRecord, RawQuery, SortKey};

fn results() -> GroupedResults {
    group_records(vec![
        CityRecord::new("Sevilla", "Spain", 27.4, 1),
        CityRecord::new("Málaga", "Spain", 25.1, 0),
        CityRecord::new("Bilbao", "Spain", 20.2, 11),
        CityRecord::new("Athens", "Greece", 28.0, 1),
        CityRecord::new("Thessaloniki", "Greece", 26.1, 3),
        CityRecord::new("Porto", "Portugal", 20.2, 4),
        CityRecord::new("Lisbon", "Portugal", 23.0, 1),
    ])
}

fn july() -> RawQuery {
    RawQuery::new().min_temp("18").max_temp("30").month("July")
}

fn observed(results: &GroupedResults) -> ExpansionState {
    let mut expansion = ExpansionState::new();
    for country in results.countries() {
        expansion.observe(country);
    }
    expansion
}

#[test]
fn test_collapsed_results_with_tips() {
    let criteria = validate(&july()).unwrap();
    let results = results();
    let expansion = observed(&results);
    let sorts = TableSorts::new();

    let view_model = present_search_results(
        SearchDisplay {
            criteria: &criteria,
            results: &results,
            expansion: &expansion,
            sorts: &sorts,
        },
        &[],
        None,
    );
    let text = ConsoleRenderer::plain(OutputFormat::Plain)
        .to_text(&view_model)
        .unwrap();

    insta::assert_snapshot!(text, @r#"
Found the following 7 cities in 3 countries.

▸ Greece (2 Cities)
▸ Portugal (2 Cities)
▸ Spain (3 Cities)

💡 Tips:
  • Expand a country to see its cities: vacfind search ... --expand "Greece"
  • Expand every country: vacfind search ... --expand-all
"#);
}

#[test]
fn test_expanded_table_marks_active_sort() {
    let criteria = validate(&july()).unwrap();
    let results = results();
    let mut expansion = observed(&results);
    let mut sorts = TableSorts::new();
    expansion.toggle("Spain");
    sorts.click("Spain", SortKey::Temperature);
    sorts.click("Spain", SortKey::Temperature);

    let view_model = present_search_results(
        SearchDisplay {
            criteria: &criteria,
            results: &results,
            expansion: &expansion,
            sorts: &sorts,
        },
        &[],
        None,
    );
    let text = ConsoleRenderer::plain(OutputFormat::Plain)
        .to_text(&view_model)
        .unwrap();

    insta::assert_snapshot!(text, @r"
Found the following 7 cities in 3 countries.

▸ Greece (2 Cities)
▸ Portugal (2 Cities)
▾ Spain (3 Cities)
    City     Temp (°C) ▼  Rainy days
    Sevilla  27.4         1
    Málaga   25.1         0
    Bilbao   20.2         11
");
}

#[test]
fn test_empty_results_badge_and_tips() {
    let criteria = validate(&july()).unwrap();
    let results = group_records(Vec::new());
    let expansion = ExpansionState::new();
    let sorts = TableSorts::new();

    let view_model = present_search_results(
        SearchDisplay {
            criteria: &criteria,
            results: &results,
            expansion: &expansion,
            sorts: &sorts,
        },
        &[],
        None,
    );
    let text = ConsoleRenderer::plain(OutputFormat::Plain)
        .to_text(&view_model)
        .unwrap();

    insta::assert_snapshot!(text, @r"
ℹ️ No matches

No cities found. Try changing the inputs and making another search!

💡 Tips:
  • Widen the temperature range or allow more rainy days
  • Check the month spelling: vacfind months
");
}

#[test]
fn test_json_envelope_lists_rows_of_expanded_countries_only() {
    let criteria = validate(&july().max_rainy_days("3.9")).unwrap();
    let results = results();
    let mut expansion = observed(&results);
    let mut sorts = TableSorts::new();
    expansion.toggle("Portugal");
    sorts.click("Portugal", SortKey::Rain);

    let view_model = present_search_results(
        SearchDisplay {
            criteria: &criteria,
            results: &results,
            expansion: &expansion,
            sorts: &sorts,
        },
        &["Atlantis".to_string()],
        None,
    );
    let text = ConsoleRenderer::plain(OutputFormat::Json)
        .to_text(&view_model)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert!(json.get("badge").is_none());
    assert_eq!(json["content"]["criteria"]["month"], "July");
    assert_eq!(json["content"]["criteria"]["max_rainy_days"], 3);
    assert_eq!(json["content"]["total_cities"], 7);

    let greece = &json["content"]["countries"][0];
    assert_eq!(greece["expanded"], false);
    assert_eq!(greece["city_count"], 2);
    assert!(greece.get("cities").is_none());

    let portugal = &json["content"]["countries"][1];
    assert_eq!(portugal["country"], "Portugal");
    assert_eq!(portugal["expanded"], true);
    assert_eq!(portugal["sort"]["key"], "rain");
    assert_eq!(portugal["sort"]["direction"], "asc");
    assert_eq!(portugal["cities"][0]["name"], "Lisbon");
    assert_eq!(portugal["cities"][0]["average_temperature"], 23.0);

    let tips = json["suggestions"].as_array().unwrap();
    assert!(tips[0]["description"].as_str().unwrap().contains("Atlantis"));
}

#[test]
fn test_month_list() {
    let text = ConsoleRenderer::plain(OutputFormat::Plain)
        .to_text(&present_months())
        .unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "January    jan");
    assert_eq!(lines[8], "September  sep");
}
