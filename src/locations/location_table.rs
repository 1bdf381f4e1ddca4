//! The named-region lookup used to turn user selections into coordinates.

use crate::locations::error::LocationError;
use crate::locations::kenya::{KENYA_COUNTIES, KENYA_EXTRA_COUNTIES};
use crate::types::location::{LatLon, Location};
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;
use serde::Serialize;

/// An immutable, validated set of named locations.
///
/// Names are unique ignoring ASCII case, and lookups are case-insensitive. Insertion order
/// is preserved so a presentation layer can list regions the way the table defines them.
///
/// # Examples
///
/// ```
/// use climate_mirror::LocationTable;
///
/// let table = LocationTable::kenya_counties();
/// let nairobi = table.get("nairobi").unwrap();
/// assert_eq!(nairobi.name, "Nairobi");
/// assert_eq!(table.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationTable {
    locations: Vec<Location>,
}

impl LocationTable {
    /// Builds a table, rejecting out-of-range coordinates, duplicate names and empty input.
    pub fn new(locations: Vec<Location>) -> Result<Self, LocationError> {
        if locations.is_empty() {
            return Err(LocationError::EmptyTable);
        }
        for (i, location) in locations.iter().enumerate() {
            if !location.lat_lon().is_valid() {
                return Err(LocationError::InvalidCoordinates {
                    name: location.name.clone(),
                    latitude: location.latitude,
                    longitude: location.longitude,
                });
            }
            if locations[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&location.name))
            {
                return Err(LocationError::DuplicateName(location.name.clone()));
            }
        }
        Ok(Self { locations })
    }

    /// Loads a table from a JSON array of `{"name", "latitude", "longitude"}` objects.
    pub fn from_json(json: &str) -> Result<Self, LocationError> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Self::new(locations)
    }

    /// The ten counties of the classic dashboard.
    pub fn kenya_counties() -> Self {
        Self::from_static(KENYA_COUNTIES.iter())
    }

    /// The classic counties plus a wider set of Kenyan counties.
    pub fn kenya_extended() -> Self {
        Self::from_static(KENYA_COUNTIES.iter().chain(KENYA_EXTRA_COUNTIES))
    }

    // Built-in tables are known to be valid; they are covered by tests.
    fn from_static<'a>(entries: impl Iterator<Item = &'a (&'static str, f64, f64)>) -> Self {
        Self {
            locations: entries
                .map(|&(name, latitude, longitude)| Location::new(name, latitude, longitude))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        let name = name.trim();
        self.locations
            .iter()
            .find(|location| location.name.eq_ignore_ascii_case(name))
    }

    /// Like [`LocationTable::get`], but an unknown name is an error.
    pub fn resolve(&self, name: &str) -> Result<&Location, LocationError> {
        self.get(name)
            .ok_or_else(|| LocationError::UnknownRegion(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|location| location.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Finds the region closest to `point` by great-circle distance, returning it with the
    /// distance in kilometres. Ties go to the region listed first.
    pub fn nearest(&self, point: LatLon) -> Option<(&Location, f64)> {
        self.locations
            .iter()
            .map(|location| {
                let dist_km = distance(
                    HaversineLocation {
                        latitude: point.latitude(),
                        longitude: point.longitude(),
                    },
                    HaversineLocation {
                        latitude: location.latitude,
                        longitude: location.longitude,
                    },
                    Units::Kilometers,
                );
                (location, dist_km)
            })
            .min_by_key(|(_, dist_km)| OrderedFloat(*dist_km))
    }
}
