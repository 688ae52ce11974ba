//! Itinerary - the immutable, loaded table of trip stops

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use super::TripStop;
use crate::value_objects::DateFilter;

/// Ordered, read-only collection of trip stops
///
/// Cloning is cheap: the rows are shared behind an `Arc` and never mutated
/// after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    stops: Arc<[TripStop]>,
}

impl Itinerary {
    /// Wrap loaded stops, keeping source order
    #[must_use]
    pub fn new(stops: Vec<TripStop>) -> Self {
        Self {
            stops: stops.into(),
        }
    }

    /// All stops in source order
    #[must_use]
    pub fn stops(&self) -> &[TripStop] {
        &self.stops
    }

    /// Number of stops
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the itinerary has no stops
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Iterate over stops in source order
    pub fn iter(&self) -> std::slice::Iter<'_, TripStop> {
        self.stops.iter()
    }

    /// Stops passing the given date filter, in source order
    pub fn filter<'a>(&'a self, filter: &'a DateFilter) -> impl Iterator<Item = &'a TripStop> {
        self.stops.iter().filter(|stop| filter.matches(stop.date))
    }

    /// Distinct dates, ascending
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.stops
            .iter()
            .map(|stop| stop.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct location names in order of first appearance
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.stops
            .iter()
            .map(|stop| stop.location.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First stop with exactly this location name
    ///
    /// Location names are not guaranteed unique; later duplicates are
    /// unreachable through this lookup.
    #[must_use]
    pub fn find_by_location(&self, location: &str) -> Option<&TripStop> {
        self.stops.iter().find(|stop| stop.location == location)
    }

    /// Number of stops that cannot be placed on a map
    #[must_use]
    pub fn missing_coordinates(&self) -> usize {
        self.stops.iter().filter(|stop| !stop.has_coordinates()).count()
    }
}

impl From<Vec<TripStop>> for Itinerary {
    fn from(stops: Vec<TripStop>) -> Self {
        Self::new(stops)
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a TripStop;
    type IntoIter = std::slice::Iter<'a, TripStop>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Itinerary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.stops.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::GeoLocation;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).expect("valid date")
    }

    fn stop(d: u32, location: &str, coords: Option<(f64, f64)>) -> TripStop {
        let stop = TripStop::new(date(d), location, "desc", "https://maps.example/x");
        match coords {
            Some((lat, lon)) => stop.with_coordinates(GeoLocation::new_unchecked(lat, lon)),
            None => stop,
        }
    }

    fn sample() -> Itinerary {
        Itinerary::new(vec![
            stop(16, "Topkapi Palace", Some((41.0115, 28.9834))),
            stop(15, "Hagia Sophia", Some((41.0086, 28.9802))),
            stop(15, "Blue Mosque", Some((41.0054, 28.9768))),
            stop(16, "Hagia Sophia", None),
        ])
    }

    #[test]
    fn dates_are_distinct_and_sorted() {
        assert_eq!(sample().dates(), vec![date(15), date(16)]);
    }

    #[test]
    fn locations_keep_first_appearance_order() {
        assert_eq!(
            sample().locations(),
            vec!["Topkapi Palace", "Hagia Sophia", "Blue Mosque"]
        );
    }

    #[test]
    fn find_by_location_returns_first_match() {
        let itinerary = sample();
        let found = itinerary.find_by_location("Hagia Sophia").expect("present");
        assert_eq!(found.date, date(15));
        assert!(found.has_coordinates());
        assert!(itinerary.find_by_location("hagia sophia").is_none());
    }

    #[test]
    fn filter_by_day() {
        let itinerary = sample();
        let filter = DateFilter::On(date(15));
        let names: Vec<_> = itinerary.filter(&filter).map(|s| s.location.as_str()).collect();
        assert_eq!(names, vec!["Hagia Sophia", "Blue Mosque"]);
        assert_eq!(itinerary.filter(&DateFilter::AllDays).count(), 4);
        assert_eq!(itinerary.filter(&DateFilter::On(date(20))).count(), 0);
    }

    #[test]
    fn counts_missing_coordinates() {
        assert_eq!(sample().missing_coordinates(), 1);
    }

    #[test]
    fn clone_shares_rows() {
        let a = sample();
        let b = a.clone();
        assert!(std::ptr::eq(a.stops().as_ptr(), b.stops().as_ptr()));
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json.as_array().map(Vec::len), Some(4));
        assert_eq!(json[2]["location"], "Blue Mosque");
    }
}
