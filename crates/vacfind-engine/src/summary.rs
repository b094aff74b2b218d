use crate::group::GroupedResults;

pub const NO_RESULTS_MESSAGE: &str =
    "No cities found. Try changing the inputs and making another search!";

/// Headline shown above the country list
pub fn summary_line(results: &GroupedResults) -> String {
    if results.total_cities == 0 {
        return NO_RESULTS_MESSAGE.to_string();
    }

    format!(
        "Found the following {} cities in {} countries.",
        results.total_cities, results.country_count
    )
}

/// "1 City" / "3 Cities"
pub fn city_count_label(count: usize) -> String {
    if count == 1 {
        "1 City".to_string()
    } else {
        format!("{} Cities", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group_records;
    use vacfind_types::CityRecord;

    #[test]
    fn test_summary_line() {
        let results = group_records(vec![
            CityRecord::new("Toronto", "Canada", 21.0, 9),
            CityRecord::new("Austin", "USA", 29.0, 5),
            CityRecord::new("Denver", "USA", 23.0, 7),
        ]);
        assert_eq!(
            summary_line(&results),
            "Found the following 3 cities in 2 countries."
        );
        assert_eq!(summary_line(&GroupedResults::default()), NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_city_count_label() {
        assert_eq!(city_count_label(0), "0 Cities");
        assert_eq!(city_count_label(1), "1 City");
        assert_eq!(city_count_label(12), "12 Cities");
    }
}
