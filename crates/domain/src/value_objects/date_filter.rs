//! Date filter for the map view

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::trip_date::parse_trip_date;
use crate::errors::DomainError;

/// Sentinel option that disables date filtering
pub const ALL_DAYS: &str = "All Days";

/// Which stops the map shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// Every stop regardless of date
    #[default]
    AllDays,
    /// Only stops on the given date
    On(NaiveDate),
}

impl DateFilter {
    /// Whether a stop dated `date` passes this filter
    #[must_use]
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::AllDays => true,
            Self::On(selected) => *selected == date,
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllDays => f.write_str(ALL_DAYS),
            Self::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl FromStr for DateFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(ALL_DAYS)
            || trimmed.eq_ignore_ascii_case("all")
        {
            return Ok(Self::AllDays);
        }
        parse_trip_date(trimmed)
            .map(Self::On)
            .map_err(|_| DomainError::InvalidDateFilter(trimmed.to_string()))
    }
}

impl From<NaiveDate> for DateFilter {
    fn from(date: NaiveDate) -> Self {
        Self::On(date)
    }
}
