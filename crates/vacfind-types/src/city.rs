use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One city as it appears in a lookup response.
///
/// Field names are the wire contract of the lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireCity {
    pub city: String,
    pub temperature: f64,
    #[serde(deserialize_with = "rainy_days_from_number")]
    pub rain: u32,
}

// Upstream counts are monthly averages and may be fractional.
fn rainy_days_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "invalid rainy day count: {}",
            value
        )));
    }
    Ok(value.round().min(u32::MAX as f64) as u32)
}

/// Lookup response body: country name mapped to the cities that matched in it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResponse(BTreeMap<String, Vec<WireCity>>);

impl LookupResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Add a country with its cities, replacing any previous entry for it
    pub fn with_country(mut self, country: impl Into<String>, cities: Vec<WireCity>) -> Self {
        self.0.insert(country.into(), cities);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<WireCity>> {
        self.0
    }
}

impl From<BTreeMap<String, Vec<WireCity>>> for LookupResponse {
    fn from(map: BTreeMap<String, Vec<WireCity>>) -> Self {
        Self(map)
    }
}

/// A city record after it has been received from the lookup collaborator.
///
/// Identity is `(name, country)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub country: String,
    pub average_temperature: f64,
    pub rainy_days: u32,
}

impl CityRecord {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        average_temperature: f64,
        rainy_days: u32,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            average_temperature,
            rainy_days,
        }
    }

    /// Attach the country implied by the response key to a wire record
    pub fn from_wire(country: &str, wire: WireCity) -> Self {
        Self {
            name: wire.city,
            country: country.to_string(),
            average_temperature: wire.temperature,
            rainy_days: wire.rain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes_wire_format() {
        let body = r#"{
            "Canada": [{"city": "Toronto", "temperature": 21.5, "rain": 9}],
            "USA": [
                {"city": "New York", "temperature": 24.0, "rain": 7},
                {"city": "Los Angeles", "temperature": 22.1, "rain": 0}
            ]
        }"#;

        let response = LookupResponse::from_json(body).unwrap();
        let countries: Vec<&str> = response.countries().collect();
        assert_eq!(countries, vec!["Canada", "USA"]);

        let map = response.into_inner();
        assert_eq!(map["USA"][1].city, "Los Angeles");
        assert_eq!(map["USA"][1].rain, 0);
    }

    #[test]
    fn test_fractional_rain_is_rounded() {
        let body = r#"{"Peru": [{"city": "Lima", "temperature": 19.0, "rain": 1.6}]}"#;
        let map = LookupResponse::from_json(body).unwrap().into_inner();
        assert_eq!(map["Peru"][0].rain, 2);
    }

    #[test]
    fn test_negative_rain_is_rejected() {
        let body = r#"{"Peru": [{"city": "Lima", "temperature": 19.0, "rain": -1}]}"#;
        assert!(LookupResponse::from_json(body).is_err());
    }

    #[test]
    fn test_empty_object_is_empty_response() {
        let response = LookupResponse::from_json("{}").unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_from_wire_renames_fields() {
        let record = CityRecord::from_wire(
            "Japan",
            WireCity {
                city: "Osaka".to_string(),
                temperature: 27.3,
                rain: 11,
            },
        );
        assert_eq!(record, CityRecord::new("Osaka", "Japan", 27.3, 11));
    }
}
