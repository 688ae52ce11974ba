//! Day-by-day agenda
//!
//! Groups the itinerary into numbered days, e.g.
//! `Day 1: January 15, 2025`, each listing its stops in table order.

use chrono::NaiveDate;
use domain::{Itinerary, TripStop, format_long_date};
use serde::Serialize;

/// Stops planned for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// 1-based position of the day in the trip
    pub day_number: usize,
    /// Calendar date
    pub date: NaiveDate,
    /// Stops on this day, in table order
    pub stops: Vec<TripStop>,
}

impl DayPlan {
    /// Heading such as `Day 2: January 16, 2025`
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Day {}: {}", self.day_number, format_long_date(self.date))
    }
}

/// Group the itinerary by date, earliest day first
#[must_use]
pub fn build_agenda(itinerary: &Itinerary) -> Vec<DayPlan> {
    itinerary
        .dates()
        .into_iter()
        .enumerate()
        .map(|(idx, date)| DayPlan {
            day_number: idx + 1,
            date,
            stops: itinerary
                .iter()
                .filter(|stop| stop.date == date)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Render the agenda as markdown sections
#[must_use]
pub fn format_agenda(days: &[DayPlan]) -> String {
    let mut out = String::new();
    for day in days {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("### {}\n\n", day.heading()));
        for stop in &day.stops {
            out.push_str(&format!("- **{}**: {}\n", stop.location, stop.description));
        }
    }
    out
}
