use serde::Serialize;
use vacfind_types::{Field, Month, RawQuery, ValidationError};

/// Upper bound of the rainy-days filter (days in the longest month)
pub const RAINY_DAYS_MAX: u32 = 31;

/// Normalized, validated search parameters.
///
/// Only [`validate`] builds one, so every instance satisfies
/// `min_temp <= max_temp` and `max_rainy_days <= 31`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCriteria {
    min_temp: f64,
    max_temp: f64,
    month: Month,
    max_rainy_days: u32,
}

impl SearchCriteria {
    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn max_rainy_days(&self) -> u32 {
        self.max_rainy_days
    }
}

/// Validate raw search input into [`SearchCriteria`].
///
/// Checks run in a fixed order so that one input always yields the same error:
/// blank fields, temperature parsing, `min > max`, infinite bounds, month name,
/// rainy days. The rainy-days value is clamped into `[0, 31]` rather than rejected.
pub fn validate(raw: &RawQuery) -> Result<SearchCriteria, ValidationError> {
    let min_text = required(&raw.min_temp, Field::MinTemp)?;
    let max_text = required(&raw.max_temp, Field::MaxTemp)?;
    let month_text = required(&raw.month, Field::Month)?;

    let min_temp = parse_temperature(min_text, Field::MinTemp)?;
    let max_temp = parse_temperature(max_text, Field::MaxTemp)?;

    if min_temp > max_temp {
        return Err(ValidationError::MinGreaterThanMax {
            min: min_temp,
            max: max_temp,
        });
    }

    require_finite(min_temp, min_text, Field::MinTemp)?;
    require_finite(max_temp, max_text, Field::MaxTemp)?;

    let month = month_text
        .parse::<Month>()
        .map_err(|_| ValidationError::OutOfRange {
            field: Field::Month,
            value: month_text.to_string(),
        })?;

    let max_rainy_days = normalize_rainy_days(raw.max_rainy_days.as_deref())?;

    Ok(SearchCriteria {
        min_temp,
        max_temp,
        month,
        max_rainy_days,
    })
}

fn required(value: &Option<String>, field: Field) -> Result<&str, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::MissingField(field)),
    }
}

// Unparsable numbers (NaN included) share the blank-field message.
fn parse_temperature(text: &str, field: Field) -> Result<f64, ValidationError> {
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

// Infinite bounds order correctly against `min > max` but cannot be sent as a query.
fn require_finite(value: f64, text: &str, field: Field) -> Result<(), ValidationError> {
    if value.is_finite() {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field,
        value: text.to_string(),
    })
}

fn normalize_rainy_days(text: Option<&str>) -> Result<u32, ValidationError> {
    let text = match text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(0),
    };

    let out_of_range = || ValidationError::OutOfRange {
        field: Field::MaxRainyDays,
        value: text.to_string(),
    };

    let value = text.parse::<f64>().map_err(|_| out_of_range())?;
    if value.is_nan() {
        return Err(out_of_range());
    }

    Ok(value.trunc().clamp(0.0, RAINY_DAYS_MAX as f64) as u32)
}
