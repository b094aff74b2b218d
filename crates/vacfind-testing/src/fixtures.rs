//! Sample lookup responses shared by runtime and CLI tests.

use vacfind_types::{LookupResponse, WireCity};

/// Three countries, seven cities, one accented name and one tie on temperature
pub const SAMPLE_JSON: &str = r#"{
  "Spain": [
    {"city": "Sevilla", "temperature": 27.4, "rain": 1},
    {"city": "Málaga", "temperature": 25.1, "rain": 0},
    {"city": "Bilbao", "temperature": 20.2, "rain": 11}
  ],
  "Greece": [
    {"city": "Athens", "temperature": 28.0, "rain": 1},
    {"city": "Thessaloniki", "temperature": 26.1, "rain": 3}
  ],
  "Portugal": [
    {"city": "Porto", "temperature": 20.2, "rain": 4},
    {"city": "Lisbon", "temperature": 23.0, "rain": 1}
  ]
}"#;

pub const EMPTY_JSON: &str = "{}";

pub fn sample_response() -> LookupResponse {
    match LookupResponse::from_json(SAMPLE_JSON) {
        Ok(response) => response,
        Err(err) => panic!("sample fixture must parse: {}", err),
    }
}

/// A response with a single country, handy when a test swaps result sets
pub fn single_country(country: &str, cities: &[(&str, f64, u32)]) -> LookupResponse {
    LookupResponse::new().with_country(
        country,
        cities
            .iter()
            .map(|(city, temperature, rain)| WireCity {
                city: city.to_string(),
                temperature: *temperature,
                rain: *rain,
            })
            .collect(),
    )
}
