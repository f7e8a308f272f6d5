//! View state for the schedule page: filters, the focused event and the map.
//!
//! Everything shown is re-derived from the dataset and the current state on
//! each read. The map only receives pan/zoom commands once it has reported
//! itself ready; commands before that are dropped.

use crate::aggregate::{VenueWithEvents, aggregate_venues, selectable_venue_names};
use crate::filter::{VenueFilter, date_options, visible_days};
use crate::location::{CITY_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, Location};
use crate::schedule::{Event, ScheduleData, format_long_date};
use crate::venue::{VenueTable, is_placeholder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The slice of a map widget the view drives.
pub trait MapControl {
    fn pan_to(&mut self, location: Location);
    fn set_zoom(&mut self, zoom: u8);
}

/// A map control that only remembers where it was told to look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCamera {
    pub center: Location,
    pub zoom: u8,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            center: CITY_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapControl for MapCamera {
    fn pan_to(&mut self, location: Location) {
        self.center = location;
    }

    fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl SelectedEvent {
    pub fn is_at(&self, venue_name: &str) -> bool {
        self.event.venue.contains(venue_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The event is now focused; `recentered` tells whether the map moved.
    Focused { recentered: bool },
    NotActionable,
    NotFound,
}

impl ClickOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickOutcome::Focused { .. } => "focused",
            ClickOutcome::NotActionable => "not_actionable",
            ClickOutcome::NotFound => "not_found",
        }
    }

    pub fn recentered(&self) -> bool {
        matches!(self, ClickOutcome::Focused { recentered: true })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub index: usize,
    pub name: String,
    pub time: String,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub actionable: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRows {
    /// Position of the day in the schedule; clicks address rows by it.
    pub day: usize,
    pub date: NaiveDate,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub events: Vec<EventRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    #[serde(flatten)]
    pub venue: VenueWithEvents,
    pub visible: bool,
    pub popup_open: bool,
}

pub struct ScheduleView<M: MapControl = MapCamera> {
    data: ScheduleData,
    table: VenueTable,
    venues: Vec<VenueWithEvents>,
    location_options: Vec<String>,
    filter: VenueFilter,
    selected: Option<SelectedEvent>,
    map: Option<M>,
}

impl<M: MapControl> ScheduleView<M> {
    pub fn new(data: ScheduleData, table: VenueTable) -> Self {
        let mut view = Self {
            data,
            table,
            venues: Vec::new(),
            location_options: Vec::new(),
            filter: VenueFilter::default(),
            selected: None,
            map: None,
        };
        view.rebuild();
        view
    }

    fn rebuild(&mut self) {
        self.venues = aggregate_venues(&self.data, &self.table);
        self.location_options = selectable_venue_names(&self.data, &self.table);
        info!(
            days = self.data.schedule.len(),
            events = self.data.event_count(),
            venues = self.venues.len(),
            "schedule loaded"
        );
    }

    /// Swap in a new dataset. The focused event is dropped and filters the new
    /// dataset cannot satisfy are cleared. Returns whether any filter was cleared.
    pub fn reload(&mut self, data: ScheduleData) -> bool {
        self.data = data;
        self.selected = None;
        self.rebuild();

        let mut cleared = false;
        if let Some(date) = self.filter.date {
            if !self.date_options().contains(&date) {
                info!(%date, "date filter cleared, not in the loaded schedule");
                self.filter.date = None;
                cleared = true;
            }
        }
        if let Some(location) = self.filter.selected_location() {
            if !self.location_options.iter().any(|name| name == location) {
                info!(location, "location filter cleared, not in the loaded schedule");
                self.filter.location = None;
                cleared = true;
            }
        }
        cleared
    }

    pub fn data(&self) -> &ScheduleData {
        &self.data
    }

    pub fn table(&self) -> &VenueTable {
        &self.table
    }

    pub fn venues(&self) -> &[VenueWithEvents] {
        &self.venues
    }

    pub fn location_options(&self) -> &[String] {
        &self.location_options
    }

    pub fn date_options(&self) -> Vec<NaiveDate> {
        date_options(&self.data)
    }

    pub fn filter(&self) -> &VenueFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: VenueFilter) {
        debug!(?filter, "filters changed");
        self.filter = VenueFilter::new(filter.date, filter.location);
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        debug!(?date, "date filter changed");
        self.filter.date = date;
    }

    pub fn set_location_filter(&mut self, location: Option<String>) {
        debug!(?location, "location filter changed");
        self.filter.location = location.filter(|name| !name.trim().is_empty());
    }

    pub fn filtered_venues(&self) -> Vec<VenueWithEvents> {
        self.filter.apply(&self.venues)
    }

    pub fn selected(&self) -> Option<&SelectedEvent> {
        self.selected.as_ref()
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    /// Hand over the initialised map. Only the first call counts.
    pub fn map_ready(&mut self, map: M) -> bool {
        if self.map.is_some() {
            debug!("map already ready, ignoring readiness signal");
            return false;
        }
        self.map = Some(map);
        info!("map ready");
        true
    }

    /// A row is clickable when its first venue and its time are announced and the venue resolves.
    pub fn is_actionable(&self, event: &Event) -> bool {
        let Some(venue) = event.venue.primary() else {
            return false;
        };
        !is_placeholder(venue)
            && !is_placeholder(&event.time)
            && self.table.resolve(venue).is_some()
    }

    /// Click on the `index`-th event of the `day`-th schedule entry.
    pub fn click_event(&mut self, day: usize, index: usize) -> ClickOutcome {
        let Some((date, event)) = self
            .data
            .event_at(day, index)
            .map(|(date, event)| (date, event.clone()))
        else {
            return ClickOutcome::NotFound;
        };
        if !self.is_actionable(&event) {
            debug!(event = %event.name, "event is not actionable");
            return ClickOutcome::NotActionable;
        }
        self.focus_event(event, date)
    }

    fn focus_event(&mut self, event: Event, date: NaiveDate) -> ClickOutcome {
        let location = event
            .venue
            .primary()
            .and_then(|venue| self.table.resolve(venue));
        info!(event = %event.name, %date, "event focused");
        self.selected = Some(SelectedEvent {
            event,
            date,
            location,
        });
        let recentered = match location {
            Some(location) => self.recenter(location),
            None => false,
        };
        ClickOutcome::Focused { recentered }
    }

    /// Recenter on a marker among the currently filtered venues. Focus is left alone.
    pub fn click_marker(&mut self, venue_name: &str) -> Option<bool> {
        let location = self
            .filtered_venues()
            .into_iter()
            .find(|venue| venue.venue_name == venue_name)?
            .location;
        Some(self.recenter(location))
    }

    pub fn close_popup(&mut self) {
        if self.selected.take().is_some() {
            debug!("selection cleared");
        }
    }

    fn recenter(&mut self, location: Location) -> bool {
        match self.map.as_mut() {
            Some(map) => {
                map.pan_to(location);
                map.set_zoom(FOCUS_ZOOM);
                true
            }
            None => {
                debug!(?location, "map not ready, recenter skipped");
                false
            }
        }
    }

    pub fn marker_visible(&self, venue: &VenueWithEvents) -> bool {
        self.selected
            .as_ref()
            .is_none_or(|selected| selected.is_at(&venue.venue_name))
    }

    pub fn popup_open(&self, venue: &VenueWithEvents) -> bool {
        self.filter.selected_location() == Some(venue.venue_name.as_str())
            || self
                .selected
                .as_ref()
                .is_some_and(|selected| selected.is_at(&venue.venue_name))
    }

    pub fn markers(&self) -> Vec<MarkerView> {
        self.filtered_venues()
            .into_iter()
            .map(|venue| MarkerView {
                visible: self.marker_visible(&venue),
                popup_open: self.popup_open(&venue),
                venue,
            })
            .collect()
    }

    /// The event panel: visible days with per-row click and highlight state.
    pub fn event_rows(&self) -> Vec<DayRows> {
        visible_days(&self.data, self.filter.date)
            .into_iter()
            .map(|(position, day)| DayRows {
                day: position,
                date: day.date,
                label: format_long_date(day.date),
                date_range: day.date_range.clone(),
                events: day
                    .events
                    .iter()
                    .enumerate()
                    .map(|(index, event)| {
                        let actionable = self.is_actionable(event);
                        EventRow {
                            index,
                            name: event.name.clone(),
                            time: event.time.clone(),
                            venue: event.venue.display(),
                            description: event.description.clone(),
                            actionable,
                            highlighted: actionable
                                && self
                                    .selected
                                    .as_ref()
                                    .is_some_and(|selected| selected.event.name == event.name),
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
