use super::{LoadError, LoadResult};
use crate::schedule::ScheduleData;
use crate::venue::{VenueEntry, VenueTable};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Dataset compiled into the binary.
static BUNDLED_SCHEDULE: &str = include_str!("../../data/schedule.json");

pub fn bundled_schedule() -> LoadResult<ScheduleData> {
    parse_schedule_json(BUNDLED_SCHEDULE)
}

pub fn parse_schedule_json(input: &str) -> LoadResult<ScheduleData> {
    Ok(serde_json::from_str(input)?)
}

pub fn load_schedule_from_json<P: AsRef<Path>>(path: P) -> LoadResult<ScheduleData> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let data: ScheduleData = serde_json::from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), days = data.schedule.len(), "schedule read");
    Ok(data)
}

/// Reads an ordered array of `{ "name", "lat", "lng" }` entries.
pub fn load_venue_table_from_json<P: AsRef<Path>>(path: P) -> LoadResult<VenueTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let entries: Vec<VenueEntry> = serde_json::from_reader(BufReader::new(file))?;
    if entries.is_empty() {
        return Err(LoadError::InvalidData(format!(
            "venue table {} contained no entries",
            path.display()
        )));
    }
    if let Some(entry) = entries
        .iter()
        .find(|entry| !entry.location.lat.is_finite() || !entry.location.lng.is_finite())
    {
        return Err(LoadError::InvalidData(format!(
            "venue '{}' has non-finite coordinates",
            entry.name
        )));
    }
    debug!(path = %path.display(), venues = entries.len(), "venue table read");
    Ok(VenueTable::new(entries))
}
