//! Venue classification and coordinate lookup.
//!
//! Coordinates come from a fixed, ordered table of known venues. A venue name
//! resolves either by exact match or, failing that, by containing one of the
//! table keys (case-insensitively). Names that never resolve are simply not
//! shown on the map.

use crate::location::Location;
use serde::{Deserialize, Serialize};

/// Phrases marking a venue or time as not yet announced.
pub const PLACEHOLDER_PATTERNS: [&str; 3] = ["TBA", "to be announced", "Venue to be announced"];

pub fn is_placeholder(text: &str) -> bool {
    let text = text.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .any(|pattern| text.contains(&pattern.to_lowercase()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueEntry {
    pub name: String,
    #[serde(flatten)]
    pub location: Location,
}

impl VenueEntry {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            location: Location::new(lat, lng),
        }
    }
}

/// Ordered name → coordinate table. Order decides which key wins the substring fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueTable {
    entries: Vec<VenueEntry>,
}

impl Default for VenueTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VenueTable {
    pub fn new(entries: Vec<VenueEntry>) -> Self {
        Self { entries }
    }

    /// Known Cebu venues for the festival.
    pub fn builtin() -> Self {
        Self::new(vec![
            VenueEntry::new("SM Seaside Cebu", 10.2791, 123.8585),
            VenueEntry::new("GMall", 10.3127, 123.8854),
            VenueEntry::new("Basilica del Sto. Nino", 10.2929, 123.9021),
            VenueEntry::new("Fuente Osmeña", 10.3116, 123.8913),
            VenueEntry::new("Plaza Independencia", 10.2925, 123.9021),
            VenueEntry::new("Cebu City Sports Complex", 10.3095, 123.8862),
            VenueEntry::new("MCIAA T1", 10.3075, 123.9789),
            VenueEntry::new("Ayala Center Cebu", 10.3187, 123.9048),
            VenueEntry::new("SM City Cebu", 10.3119, 123.9178),
            VenueEntry::new("Basilica Minore del Sto. Niño", 10.2929, 123.9021),
            VenueEntry::new("Mandaue City", 10.3231, 123.9223),
            VenueEntry::new("SRP", 10.2674, 123.8805),
            VenueEntry::new("Pacific Grand Ballroom", 10.3142, 123.9163),
        ])
    }

    pub fn entries(&self) -> &[VenueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact key first, then the first key (in table order) contained in the name.
    pub fn resolve(&self, venue_name: &str) -> Option<Location> {
        if let Some(entry) = self.entries.iter().find(|entry| entry.name == venue_name) {
            return Some(entry.location);
        }

        let venue_lower = venue_name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| venue_lower.contains(&entry.name.to_lowercase()))
            .map(|entry| entry.location)
    }

    /// Resolvable and not a placeholder: the venue may appear on the map.
    pub fn is_mappable(&self, venue_name: &str) -> bool {
        !is_placeholder(venue_name) && self.resolve(venue_name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_patterns_are_case_insensitive() {
        assert!(is_placeholder("tba"));
        assert!(is_placeholder("Time: tBa"));
        assert!(is_placeholder("VENUE TO BE ANNOUNCED"));
        assert!(!is_placeholder("Plaza Independencia"));
    }

    #[test]
    fn exact_match_beats_substring_order() {
        let table = VenueTable::new(vec![
            VenueEntry::new("Mall", 1.0, 1.0),
            VenueEntry::new("Big Mall", 2.0, 2.0),
        ]);
        assert_eq!(table.resolve("Big Mall"), Some(Location::new(2.0, 2.0)));
        assert_eq!(table.resolve("Big Mall Annex"), Some(Location::new(1.0, 1.0)));
        assert_eq!(table.resolve("Stadium"), None);
    }
}
