//! Parsing and display of itinerary dates

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::DomainError;

/// Date-only formats accepted in the itinerary sheet
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Timestamp formats produced when a spreadsheet date column is exported
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse an itinerary date
///
/// Spreadsheet exports frequently carry a midnight timestamp
/// (`2025-01-15 00:00:00`); the time part is dropped.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if no supported format matches.
pub fn parse_trip_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }

    Err(DomainError::InvalidDate(trimmed.to_string()))
}

/// Format a date the way agenda headings show it, e.g. `January 15, 2025`
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_trip_date("2025-01-15").ok(), Some(jan15()));
    }

    #[test]
    fn parses_spreadsheet_timestamp() {
        assert_eq!(parse_trip_date("2025-01-15 00:00:00").ok(), Some(jan15()));
        assert_eq!(parse_trip_date("2025-01-15T00:00:00").ok(), Some(jan15()));
    }

    #[test]
    fn parses_european_and_us_dates() {
        assert_eq!(parse_trip_date("15.01.2025").ok(), Some(jan15()));
        assert_eq!(parse_trip_date("01/15/2025").ok(), Some(jan15()));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_trip_date("  2025-01-15 ").ok(), Some(jan15()));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_trip_date("next tuesday"),
            Err(DomainError::InvalidDate(s)) if s == "next tuesday"
        ));
        assert!(parse_trip_date("").is_err());
    }

    #[test]
    fn long_date_format() {
        assert_eq!(format_long_date(jan15()), "January 15, 2025");
        let feb3 = NaiveDate::from_ymd_opt(2025, 2, 3).expect("valid date");
        assert_eq!(format_long_date(feb3), "February 3, 2025");
    }
}
