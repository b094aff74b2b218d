use vacfind_engine::{
    ExpansionState, GroupedResults, SearchCriteria, TableSorts, city_count_label, sorted_cities,
    summary_line,
};
use vacfind_types::SortSpec;

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CityRowViewModel, CommandResultViewModel, CountryViewModel, CriteriaViewModel,
    ExportViewModel, Guidance, SearchResultsViewModel, StatusBadge,
};

/// Everything a search screen shows, borrowed from the session
pub struct SearchDisplay<'a> {
    pub criteria: &'a SearchCriteria,
    pub results: &'a GroupedResults,
    pub expansion: &'a ExpansionState,
    pub sorts: &'a TableSorts,
}

pub fn present_search_results(
    display: SearchDisplay<'_>,
    unmatched_expands: &[String],
    export: Option<ExportViewModel>,
) -> CommandResultViewModel<SearchResultsViewModel> {
    let SearchDisplay {
        criteria,
        results,
        expansion,
        sorts,
    } = display;

    let countries: Vec<CountryViewModel> = results
        .groups
        .iter()
        .map(|group| {
            let sort = sorts.spec_for(&group.country);
            let expanded = expansion.is_expanded(&group.country);
            let cities = if expanded {
                sorted_cities(&group.cities, sort)
                    .into_iter()
                    .map(|city| CityRowViewModel {
                        name: city.name,
                        average_temperature: city.average_temperature,
                        rainy_days: city.rainy_days,
                    })
                    .collect()
            } else {
                Vec::new()
            };
            CountryViewModel {
                country: group.country.clone(),
                city_count: group.len(),
                label: city_count_label(group.len()),
                expanded,
                sort,
                cities,
            }
        })
        .collect();

    let content = SearchResultsViewModel {
        criteria: CriteriaViewModel {
            min_temp: criteria.min_temp(),
            max_temp: criteria.max_temp(),
            month: criteria.month(),
            max_rainy_days: criteria.max_rainy_days(),
        },
        summary: summary_line(results),
        total_cities: results.total_cities,
        country_count: results.country_count,
        countries,
        export,
    };

    let mut result = CommandResultViewModel::new(content);

    if results.is_empty() {
        result = result
            .with_badge(StatusBadge::info("No matches"))
            .with_suggestion(Guidance::new(
                "Widen the temperature range or allow more rainy days",
            ))
            .with_suggestion(Guidance::new("Check the month spelling").with_command(cmd::MONTHS));
        return result;
    }

    for country in unmatched_expands {
        result = result.with_suggestion(Guidance::new(format!(
            "\"{}\" is not among the results; country names must match exactly",
            country
        )));
    }

    let first_collapsed = result
        .content
        .countries
        .iter()
        .find(|country| !country.expanded)
        .map(|country| country.country.clone());
    let any_expanded = result.content.countries.iter().any(|country| country.expanded);

    if let (Some(country), false) = (first_collapsed, any_expanded) {
        result = result
            .with_suggestion(
                Guidance::new("Expand a country to see its cities")
                    .with_command(fmt::search_expand(&country)),
            )
            .with_suggestion(
                Guidance::new("Expand every country").with_command(cmd::SEARCH_EXPAND_ALL),
            );
    } else if any_expanded && result.content.countries.iter().all(|c| c.sort == SortSpec::default()) {
        result = result.with_suggestion(
            Guidance::new("Click a column header to reorder the tables")
                .with_command(cmd::SEARCH_SORT),
        );
    }

    result
}
