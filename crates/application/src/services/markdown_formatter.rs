//! Markdown table rendering of the itinerary
//!
//! Pure function; cell text is passed through without escaping.

use domain::TripStop;

const HEADER: &str = "| Date | Location | Description | Google Maps Link |\n";
const SEPARATOR: &str = "|------|----------|-------------|------------------|\n";

/// Format stops as a markdown table
///
/// Columns are date, location, description and a `[Link](url)` cell; one
/// row per stop in the given order.
#[must_use]
pub fn format_markdown_table<'a>(stops: impl IntoIterator<Item = &'a TripStop>) -> String {
    let mut markdown = String::from(HEADER);
    markdown.push_str(SEPARATOR);

    for stop in stops {
        markdown.push_str(&format!(
            "| {} | {} | {} | [Link]({}) |\n",
            stop.date.format("%Y-%m-%d"),
            stop.location,
            stop.description,
            stop.maps_link
        ));
    }

    markdown
}
