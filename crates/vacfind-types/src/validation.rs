use serde::{Deserialize, Serialize};
use std::fmt;

use crate::query::Field;

pub const MISSING_FIELD_MESSAGE: &str = "Please fill out all search fields.";
pub const MIN_GREATER_THAN_MAX_MESSAGE: &str =
    "Minimum temperature cannot be greater than maximum temperature.";
pub const INVALID_MONTH_MESSAGE: &str = "Please select a valid month.";

/// Tag identifying why a search request was rejected before any lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationErrorKind {
    MissingField,
    MinGreaterThanMax,
    OutOfRange,
}

/// Local, pre-flight rejection of a search request
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was blank or not a number
    MissingField(Field),
    MinGreaterThanMax { min: f64, max: f64 },
    OutOfRange { field: Field, value: String },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingField(_) => ValidationErrorKind::MissingField,
            ValidationError::MinGreaterThanMax { .. } => ValidationErrorKind::MinGreaterThanMax,
            ValidationError::OutOfRange { .. } => ValidationErrorKind::OutOfRange,
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::MissingField(field) => Some(*field),
            ValidationError::MinGreaterThanMax { .. } => None,
            ValidationError::OutOfRange { field, .. } => Some(*field),
        }
    }

    /// The one human-readable message shown for this rejection
    pub fn message(&self) -> String {
        match self {
            ValidationError::MissingField(_) => MISSING_FIELD_MESSAGE.to_string(),
            ValidationError::MinGreaterThanMax { .. } => MIN_GREATER_THAN_MAX_MESSAGE.to_string(),
            ValidationError::OutOfRange {
                field: Field::Month,
                ..
            } => INVALID_MONTH_MESSAGE.to_string(),
            ValidationError::OutOfRange { field, value } => {
                format!("{} is out of range: {}", field.label(), value)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_search_form_copy() {
        assert_eq!(
            ValidationError::MissingField(Field::Month).to_string(),
            "Please fill out all search fields."
        );
        assert_eq!(
            ValidationError::MinGreaterThanMax {
                min: 30.0,
                max: 10.0
            }
            .to_string(),
            "Minimum temperature cannot be greater than maximum temperature."
        );
        assert_eq!(
            ValidationError::OutOfRange {
                field: Field::Month,
                value: "Smarch".to_string()
            }
            .to_string(),
            "Please select a valid month."
        );
        assert_eq!(
            ValidationError::OutOfRange {
                field: Field::MaxRainyDays,
                value: "lots".to_string()
            }
            .to_string(),
            "Maximum rainy days is out of range: lots"
        );
    }

    #[test]
    fn test_kind_serializes_as_tag() {
        let kind = ValidationError::MissingField(Field::MinTemp).kind();
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""missing-field""#);
        let kind = ValidationError::MinGreaterThanMax { min: 1.0, max: 0.0 }.kind();
        assert_eq!(
            serde_json::to_string(&kind).unwrap(),
            r#""min-greater-than-max""#
        );
    }
}
