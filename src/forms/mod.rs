//! Form definitions backing the bandstand routes.
//!
//! Browsers submit every field as text, so the form structs keep `String`
//! fields and the conversions into domain payloads do the parsing. A failed
//! conversion carries the field name so the alert can point at it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::single::Single;

pub mod band;
pub mod main;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("please fill in the {0} field")]
    MissingField(&'static str),

    #[error("{0} is not a valid number")]
    InvalidNumber(&'static str),

    #[error("{0} must be a positive whole number")]
    NotPositive(&'static str),

    #[error("{0} is not a valid date")]
    InvalidDate(&'static str),

    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    #[error("invalid band id")]
    InvalidBandId,
}

/// Trims a required text field, rejecting blank input.
pub(crate) fn required_str(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field, mapping blank input to `None`.
pub(crate) fn optional_str(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a required finite number. Zero and negatives are fine here; the
/// coordinate plane has all four quadrants.
pub(crate) fn required_f64(field: &'static str, value: &str) -> Result<f64, FormError> {
    let parsed = required_str(field, value)?
        .parse::<f64>()
        .map_err(|_| FormError::InvalidNumber(field))?;
    if !parsed.is_finite() {
        return Err(FormError::InvalidNumber(field));
    }
    Ok(parsed)
}

/// Parses an optional finite number, mapping blank input to `None`.
pub(crate) fn optional_f64(field: &'static str, value: &str) -> Result<Option<f64>, FormError> {
    match optional_str(value) {
        Some(text) => {
            let parsed = text
                .parse::<f64>()
                .map_err(|_| FormError::InvalidNumber(field))?;
            if !parsed.is_finite() {
                return Err(FormError::InvalidNumber(field));
            }
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Parses a required integer that must be greater than zero.
pub(crate) fn required_positive_i32(field: &'static str, value: &str) -> Result<i32, FormError> {
    let parsed = required_str(field, value)?
        .parse::<i32>()
        .map_err(|_| FormError::InvalidNumber(field))?;
    if parsed <= 0 {
        return Err(FormError::NotPositive(field));
    }
    Ok(parsed)
}

/// Parses a required timestamp. Accepts RFC 3339 as well as the formats a
/// `datetime-local` or `date` input produces.
pub(crate) fn required_date_time(
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, FormError> {
    let text = required_str(field, value)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&text, format) {
            return Ok(parsed.and_utc());
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        if let Some(parsed) = parsed.and_hms_opt(0, 0, 0) {
            return Ok(parsed.and_utc());
        }
    }
    Err(FormError::InvalidDate(field))
}

/// Parses an optional calendar date, mapping blank input to `None`.
pub(crate) fn optional_date(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDate>, FormError> {
    match optional_str(value) {
        Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| FormError::InvalidDate(field)),
        None => Ok(None),
    }
}

/// Splits the comma-separated singles field into records, trimming each name
/// and dropping empty segments. A field with no usable names yields `None`,
/// never an empty list.
pub fn parse_singles(text: &str) -> Option<Vec<Single>> {
    let singles: Vec<Single> = text
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Single::new)
        .collect();
    if singles.is_empty() { None } else { Some(singles) }
}

/// Joins singles back into the comma-separated form representation.
pub fn join_singles(singles: &[Single]) -> String {
    singles
        .iter()
        .map(|single| single.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singles_field_is_split_trimmed_and_cleaned() {
        let singles = parse_singles(" Smells Like Teen Spirit , Come as You Are,,  ").unwrap();
        let names: Vec<&str> = singles.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Smells Like Teen Spirit", "Come as You Are"]);
    }

    #[test]
    fn blank_singles_field_means_no_singles() {
        assert!(parse_singles("").is_none());
        assert!(parse_singles("  , ,  ").is_none());
    }

    #[test]
    fn singles_round_trip_through_the_form_format() {
        let singles = parse_singles("Last Nite,Reptilia , Someday").unwrap();
        assert_eq!(join_singles(&singles), "Last Nite, Reptilia, Someday");
    }

    #[test]
    fn zero_is_a_valid_coordinate_but_not_a_valid_member_count() {
        assert_eq!(required_f64("x", "0").unwrap(), 0.0);
        assert_eq!(required_f64("x", "-12.5").unwrap(), -12.5);
        assert!(matches!(
            required_positive_i32("numberOfParticipants", "0"),
            Err(FormError::NotPositive("numberOfParticipants"))
        ));
    }

    #[test]
    fn blank_required_number_reports_the_field() {
        assert!(matches!(
            required_f64("y", "   "),
            Err(FormError::MissingField("y"))
        ));
        assert!(matches!(
            required_f64("y", "abc"),
            Err(FormError::InvalidNumber("y"))
        ));
        assert!(matches!(
            required_f64("y", "NaN"),
            Err(FormError::InvalidNumber("y"))
        ));
    }

    #[test]
    fn date_time_accepts_browser_and_wire_formats() {
        for value in [
            "1987-01-01T00:00:00Z",
            "1987-01-01T00:00:00",
            "1987-01-01T00:00",
            "1987-01-01",
        ] {
            let parsed = required_date_time("creationDate", value).unwrap();
            assert_eq!(parsed.to_rfc3339(), "1987-01-01T00:00:00+00:00");
        }
        assert!(matches!(
            required_date_time("creationDate", "01.01.1987"),
            Err(FormError::InvalidDate("creationDate"))
        ));
    }

    #[test]
    fn optional_date_distinguishes_blank_from_malformed() {
        assert_eq!(optional_date("birthday", "  ").unwrap(), None);
        assert!(optional_date("birthday", "1967-02-20").unwrap().is_some());
        assert!(optional_date("birthday", "20.02.1967").is_err());
    }
}
