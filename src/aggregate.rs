use crate::location::Location;
use crate::schedule::ScheduleData;
use crate::venue::{VenueTable, is_placeholder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One event as listed in a venue popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueEvent {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
}

/// A mappable venue with every event held there, across all days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueWithEvents {
    pub venue_name: String,
    pub location: Location,
    pub events: Vec<VenueEvent>,
}

impl VenueWithEvents {
    pub fn new(venue_name: impl Into<String>, location: Location) -> Self {
        Self {
            venue_name: venue_name.into(),
            location,
            events: Vec::new(),
        }
    }

    /// Distinct event dates, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.events
            .iter()
            .map(|event| event.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &VenueEvent> {
        self.events.iter().filter(move |event| event.date == date)
    }
}

/// Group every mappable venue occurrence in the schedule by venue name.
///
/// Multi-venue events are counted once per listed venue. Venues come out in the
/// order they are first seen; events keep schedule order.
pub fn aggregate_venues(data: &ScheduleData, table: &VenueTable) -> Vec<VenueWithEvents> {
    let mut venues: Vec<VenueWithEvents> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for day in &data.schedule {
        for event in &day.events {
            for venue in event.venue.as_slice() {
                if is_placeholder(venue) {
                    continue;
                }
                let Some(location) = table.resolve(venue) else {
                    continue;
                };
                let slot = *index.entry(venue.clone()).or_insert_with(|| {
                    venues.push(VenueWithEvents::new(venue.clone(), location));
                    venues.len() - 1
                });
                venues[slot].events.push(VenueEvent {
                    name: event.name.clone(),
                    date: day.date,
                    time: event.time.clone(),
                });
            }
        }
    }

    venues
}

/// Options for the location selector: mappable venue names, deduplicated and sorted.
pub fn selectable_venue_names(data: &ScheduleData, table: &VenueTable) -> Vec<String> {
    data.schedule
        .iter()
        .flat_map(|day| day.events.iter())
        .flat_map(|event| event.venue.as_slice().iter())
        .filter(|venue| table.is_mappable(venue))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
