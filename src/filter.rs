use crate::aggregate::VenueWithEvents;
use crate::schedule::{DaySchedule, ScheduleData};
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// User-selected restrictions. `None` or a blank value on either axis means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFilter {
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
}

impl VenueFilter {
    pub fn new(date: Option<NaiveDate>, location: Option<String>) -> Self {
        Self {
            date,
            location: location.filter(|name| !name.trim().is_empty()),
        }
    }

    /// The location restriction, if any. A blank name restricts nothing.
    pub fn selected_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|name| !name.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.selected_location().is_none()
    }

    pub fn apply(&self, venues: &[VenueWithEvents]) -> Vec<VenueWithEvents> {
        let mut filtered = venues.to_vec();
        if let Some(date) = self.date {
            filtered = filter_by_date(filtered, date);
        }
        if let Some(location) = self.selected_location() {
            filtered = filter_by_location(filtered, location);
        }
        filtered
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.trim().is_empty()))
}

fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match blank_as_none(deserializer)? {
        Some(value) => value.trim().parse::<NaiveDate>().map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// Keep only events on `date`; venues left without events are dropped.
pub fn filter_by_date(venues: Vec<VenueWithEvents>, date: NaiveDate) -> Vec<VenueWithEvents> {
    venues
        .into_iter()
        .filter_map(|mut venue| {
            venue.events.retain(|event| event.date == date);
            (!venue.events.is_empty()).then_some(venue)
        })
        .collect()
}

pub fn filter_by_location(venues: Vec<VenueWithEvents>, location: &str) -> Vec<VenueWithEvents> {
    venues
        .into_iter()
        .filter(|venue| venue.venue_name == location)
        .collect()
}

/// Every distinct schedule date, in schedule order.
pub fn date_options(data: &ScheduleData) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(data.schedule.len());
    for day in &data.schedule {
        if !dates.contains(&day.date) {
            dates.push(day.date);
        }
    }
    dates
}

/// Days listed in the event panel under the given date filter, with their
/// position in the schedule.
pub fn visible_days(data: &ScheduleData, date: Option<NaiveDate>) -> Vec<(usize, &DaySchedule)> {
    data.schedule
        .iter()
        .enumerate()
        .filter(|(_, day)| date.is_none_or(|selected| day.date == selected))
        .collect()
}
