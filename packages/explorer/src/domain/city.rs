//! City records.

use std::fmt;

use serde::Serialize;

/// Stable city identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CityId(u32);

impl CityId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Immutable city record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl City {
    pub fn new(
        id: CityId,
        name: impl Into<String>,
        country: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            coordinates,
        }
    }

    /// Whether the name or the country contains `lowercase_query`.
    ///
    /// The query must already be lowercased.
    pub fn matches(&self, lowercase_query: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_query)
            || self.country.to_lowercase().contains(lowercase_query)
    }
}
