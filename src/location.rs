use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Where the map opens before anything is focused.
pub const CITY_CENTER: Location = Location::new(10.3157, 123.8854);
pub const DEFAULT_ZOOM: u8 = 13;
/// Zoom applied when focusing a venue.
pub const FOCUS_ZOOM: u8 = 15;
