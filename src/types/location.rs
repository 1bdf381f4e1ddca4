//! Geographic value types shared by the location table and the fetcher.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use climate_mirror::LatLon;
///
/// let nairobi = LatLon(-1.29, 36.82);
/// assert_eq!(nairobi.0, -1.29); // Latitude
/// assert_eq!(nairobi.1, 36.82); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(self) -> f64 {
        self.0
    }

    pub fn longitude(self) -> f64 {
        self.1
    }

    /// `true` when latitude is in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.0) && (-180.0..=180.0).contains(&self.1)
    }
}

/// A named region with a representative point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name, unique within a [`crate::LocationTable`] (e.g. "Nairobi").
    pub name: String,
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn lat_lon(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}
