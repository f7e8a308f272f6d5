use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Festival dataset as shipped with the site: a title block plus one entry per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    pub event_name: String,
    pub tagline: String,
    pub schedule: Vec<DaySchedule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// Free-form label for multi-day entries, e.g. "January 9-19".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub time: String,
    pub venue: Venues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A venue field is either one name or, for events split across sites, a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Venues {
    Single(String),
    Multiple(Vec<String>),
}

impl Venues {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Venues::Single(name) => std::slice::from_ref(name),
            Venues::Multiple(names) => names,
        }
    }

    /// The venue used for map focus. Empty lists have none.
    pub fn primary(&self) -> Option<&str> {
        self.as_slice().first().map(String::as_str)
    }

    pub fn contains(&self, venue_name: &str) -> bool {
        self.as_slice().iter().any(|name| name == venue_name)
    }

    /// Display form used in event rows: co-located venues joined with " & ".
    pub fn display(&self) -> String {
        self.as_slice().join(" & ")
    }
}

impl From<&str> for Venues {
    fn from(value: &str) -> Self {
        Venues::Single(value.to_string())
    }
}

impl From<Vec<String>> for Venues {
    fn from(value: Vec<String>) -> Self {
        Venues::Multiple(value)
    }
}

impl Event {
    pub fn new(name: impl Into<String>, time: impl Into<String>, venue: impl Into<Venues>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            venue: venue.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl DaySchedule {
    pub fn new(date: NaiveDate, events: Vec<Event>) -> Self {
        Self {
            date,
            date_range: None,
            events,
        }
    }
}

impl ScheduleData {
    pub fn new(event_name: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            tagline: tagline.into(),
            schedule: Vec::new(),
        }
    }

    pub fn with_day(mut self, day: DaySchedule) -> Self {
        self.schedule.push(day);
        self
    }

    /// The `index`-th event of the `day`-th schedule entry. Dates may repeat, so
    /// rows are addressed by position rather than by date.
    pub fn event_at(&self, day: usize, index: usize) -> Option<(NaiveDate, &Event)> {
        let day = self.schedule.get(day)?;
        Some((day.date, day.events.get(index)?))
    }

    pub fn event_count(&self) -> usize {
        self.schedule.iter().map(|day| day.events.len()).sum()
    }
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn format_option_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_popup_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
