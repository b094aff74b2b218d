use serde::Serialize;
use std::collections::HashMap;
use vacfind_types::{CityRecord, LookupResponse};

use crate::collate::collate;

/// All cities of one country, in the order the lookup returned them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryGroup {
    pub country: String,
    pub cities: Vec<CityRecord>,
}

impl CountryGroup {
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// A result set partitioned by country, countries in alphabetical order.
///
/// Zero groups is a valid outcome ("no cities found"), not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedResults {
    pub groups: Vec<CountryGroup>,
    pub total_cities: usize,
    pub country_count: usize,
}

impl GroupedResults {
    fn from_groups(mut groups: Vec<CountryGroup>) -> Self {
        groups.retain(|group| !group.is_empty());
        groups.sort_by(|a, b| collate(&a.country, &b.country));

        let total_cities = groups.iter().map(CountryGroup::len).sum();
        let country_count = groups.len();

        Self {
            groups,
            total_cities,
            country_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, country: &str) -> Option<&CountryGroup> {
        self.groups.iter().find(|group| group.country == country)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.country.as_str())
    }
}

/// Group a lookup response (country → cities) into display order
pub fn group_response(response: LookupResponse) -> GroupedResults {
    let groups = response
        .into_inner()
        .into_iter()
        .map(|(country, cities)| CountryGroup {
            cities: cities
                .into_iter()
                .map(|wire| CityRecord::from_wire(&country, wire))
                .collect(),
            country,
        })
        .collect();

    GroupedResults::from_groups(groups)
}

/// Group a flat list of records by their `country` field, keeping input order within each country
pub fn group_records(records: Vec<CityRecord>) -> GroupedResults {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CountryGroup> = Vec::new();

    for record in records {
        let slot = *index.entry(record.country.clone()).or_insert_with(|| {
            groups.push(CountryGroup {
                country: record.country.clone(),
                cities: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].cities.push(record);
    }

    GroupedResults::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vacfind_types::WireCity;

    fn wire(city: &str) -> WireCity {
        WireCity {
            city: city.to_string(),
            temperature: 20.0,
            rain: 3,
        }
    }

    #[test]
    fn test_groups_sorted_by_country_and_counted() {
        let response = LookupResponse::new()
            .with_country("USA", vec![wire("New York"), wire("Los Angeles")])
            .with_country("Canada", vec![wire("Toronto"), wire("Vancouver")]);

        let results = group_response(response);
        let countries: Vec<&str> = results.countries().collect();
        assert_eq!(countries, vec!["Canada", "USA"]);
        assert_eq!(results.country_count, 2);
        assert_eq!(results.total_cities, 4);
        assert_eq!(results.group("USA").unwrap().cities[0].country, "USA");
    }

    #[test]
    fn test_empty_response_is_zero_results() {
        let results = group_response(LookupResponse::new());
        assert!(results.is_empty());
        assert_eq!(results.country_count, 0);
        assert_eq!(results.total_cities, 0);
    }

    #[test]
    fn test_country_without_cities_is_dropped() {
        let response = LookupResponse::new()
            .with_country("Chad", vec![])
            .with_country("Chile", vec![wire("Santiago")]);
        let results = group_response(response);
        assert_eq!(results.country_count, 1);
        assert!(results.group("Chad").is_none());
    }

    #[test]
    fn test_country_order_uses_collation() {
        let response = LookupResponse::new()
            .with_country("Österreich", vec![wire("Wien")])
            .with_country("Peru", vec![wire("Lima")])
            .with_country("italy", vec![wire("Roma")]);
        let results = group_response(response);
        let countries: Vec<&str> = results.countries().collect();
        assert_eq!(countries, vec!["italy", "Österreich", "Peru"]);
    }

    #[test]
    fn test_group_records_partitions_flat_list() {
        let records = vec![
            CityRecord::new("Lyon", "France", 21.0, 6),
            CityRecord::new("Porto", "Portugal", 22.0, 4),
            CityRecord::new("Nice", "France", 24.0, 3),
        ];
        let results = group_records(records);
        assert_eq!(results.country_count, 2);
        assert_eq!(results.total_cities, 3);

        let france: Vec<&str> = results
            .group("France")
            .unwrap()
            .cities
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(france, vec!["Lyon", "Nice"]);
    }
}
