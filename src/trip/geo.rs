//! Geographic coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, -90 to 90.
    pub lat: f64,
    /// Longitude, -180 to 180.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` when both coordinates are finite and within range.
    #[must_use]
    pub fn in_range(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

impl FromStr for GeoPoint {
    type Err = String;

    /// Parses `"<lat>,<lng>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) =
            s.split_once(',').ok_or_else(|| format!("expected LAT,LNG but got {s:?}"))?;
        let lat: f64 =
            lat.trim().parse().map_err(|e| format!("invalid latitude {:?}: {e}", lat.trim()))?;
        let lng: f64 =
            lng.trim().parse().map_err(|e| format!("invalid longitude {:?}: {e}", lng.trim()))?;
        let point = Self { lat, lng };
        if !point.in_range() {
            return Err(format!("coordinates out of range: {s}"));
        }
        Ok(point)
    }
}
