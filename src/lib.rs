pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod filter;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod location;
pub mod schedule;
pub mod telemetry;
pub mod venue;
pub mod view;

pub use aggregate::{VenueEvent, VenueWithEvents, aggregate_venues, selectable_venue_names};
pub use config::{Config, ConfigError};
pub use dataset::{
    LoadError, LoadResult, bundled_schedule, load_schedule_from_json, load_venue_table_from_json,
    parse_schedule_json,
};
pub use filter::VenueFilter;
pub use location::Location;
pub use schedule::{DaySchedule, Event, ScheduleData, Venues};
pub use venue::{VenueEntry, VenueTable, is_placeholder};
pub use view::{ClickOutcome, MapCamera, MapControl, ScheduleView, SelectedEvent};

/// Schedule from `config.schedule_path`, or the bundled dataset.
pub fn load_configured_schedule(config: &Config) -> LoadResult<ScheduleData> {
    match &config.schedule_path {
        Some(path) => load_schedule_from_json(path),
        None => bundled_schedule(),
    }
}

/// Venue table from `config.venues_path`, or the built-in table.
pub fn load_configured_venues(config: &Config) -> LoadResult<VenueTable> {
    match &config.venues_path {
        Some(path) => load_venue_table_from_json(path),
        None => Ok(VenueTable::builtin()),
    }
}
