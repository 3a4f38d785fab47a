//! Impact targets: the predefined location list and coordinate → region naming.

use serde::{Deserialize, Serialize};

use crate::constants::{LATITUDE_LIMIT, LONGITUDE_LIMIT, OCEAN_MARKER};
use crate::error::{validate_range, ImpactError, Result};

/// A named impact target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Static entry of the predefined target list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredefinedLocation {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Targets offered by the location picker, in display order.
pub const PREDEFINED_LOCATIONS: [PredefinedLocation; 7] = [
    PredefinedLocation {
        name: "New York",
        lat: 40.7128,
        lng: -74.0060,
    },
    PredefinedLocation {
        name: "London",
        lat: 51.5074,
        lng: -0.1278,
    },
    PredefinedLocation {
        name: "Tokyo",
        lat: 35.6762,
        lng: 139.6503,
    },
    PredefinedLocation {
        name: "Sydney",
        lat: -33.8688,
        lng: 151.2093,
    },
    PredefinedLocation {
        name: "Pacific Ocean",
        lat: 0.0,
        lng: -150.0,
    },
    PredefinedLocation {
        name: "Atlantic Ocean",
        lat: 30.0,
        lng: -40.0,
    },
    PredefinedLocation {
        name: "Sahara Desert",
        lat: 23.0,
        lng: 13.0,
    },
];

impl From<PredefinedLocation> for Location {
    fn from(value: PredefinedLocation) -> Self {
        Self {
            name: value.name.to_string(),
            lat: value.lat,
            lng: value.lng,
        }
    }
}

impl Default for Location {
    /// New York, the first predefined target.
    fn default() -> Self {
        PREDEFINED_LOCATIONS[0].into()
    }
}

impl Location {
    /// Builds a validated location.
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Result<Self> {
        let location = Self {
            name: name.into(),
            lat,
            lng,
        };
        location.validate()?;
        Ok(location)
    }

    /// Looks up a predefined target by exact name.
    pub fn predefined(name: &str) -> Result<Self> {
        PREDEFINED_LOCATIONS
            .iter()
            .find(|loc| loc.name == name)
            .map(|loc| (*loc).into())
            .ok_or_else(|| ImpactError::UnknownLocation(name.to_string()))
    }

    /// Builds a target from raw coordinates picked on the globe.
    ///
    /// Coordinates are rounded to two decimals and the target is named by
    /// [`region_name`].
    pub fn from_coordinates(lat: f64, lng: f64) -> Result<Self> {
        validate_range("lat", lat, -LATITUDE_LIMIT, LATITUDE_LIMIT)?;
        validate_range("lng", lng, -LONGITUDE_LIMIT, LONGITUDE_LIMIT)?;
        let lat = round_hundredths(lat);
        let lng = round_hundredths(lng);
        Ok(Self {
            name: region_name(lat, lng).to_string(),
            lat,
            lng,
        })
    }

    /// Checks coordinate ranges and that the name is present.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ImpactError::EmptyLocationName);
        }
        validate_range("lat", self.lat, -LATITUDE_LIMIT, LATITUDE_LIMIT)?;
        validate_range("lng", self.lng, -LONGITUDE_LIMIT, LONGITUDE_LIMIT)
    }

    /// Whether a hit here can raise a tsunami.
    #[inline]
    pub fn is_ocean(&self) -> bool {
        self.name.contains(OCEAN_MARKER)
    }
}

/// Coarse region name for a coordinate pair.
///
/// Bands are tested in order and the first match wins, so e.g. (0, 0) is
/// Central Africa even though it is also within the Atlantic longitude band.
pub fn region_name(lat: f64, lng: f64) -> &'static str {
    if lat.abs() < 30.0 && lng.abs() < 30.0 {
        "Central Africa"
    } else if lat > 30.0 && lng > -30.0 && lng < 60.0 {
        "Europe/Asia"
    } else if lat > 30.0 && lng < -60.0 {
        "North America"
    } else if lat < -30.0 && lng > 100.0 {
        "Australia"
    } else if lat < -30.0 && lng < -30.0 {
        "South America"
    } else if lng.abs() > 150.0 {
        "Pacific Ocean"
    } else if lng < -30.0 && lng > -100.0 {
        "Atlantic Ocean"
    } else {
        "Indian Ocean"
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
