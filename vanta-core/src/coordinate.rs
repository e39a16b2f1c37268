//! Geographic positions for job sites and technicians.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A WGS-84 position in decimal degrees.
///
/// Values outside the usual latitude and longitude ranges are accepted; they
/// simply produce more extreme distances. Only non-finite components make a
/// coordinate unusable.
///
/// # Examples
/// ```
/// use vanta_core::Coordinate;
///
/// let depot = Coordinate::new(51.5072, -0.1276);
/// assert!(depot.is_finite());
/// assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Return `true` when both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// `geo` stores positions as `x = longitude`, `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vanta_core::Coordinate;
///
/// let coord: Coord<f64> = Coordinate::new(10.0, 20.0).into();
/// assert_eq!(coord, Coord { x: 20.0, y: 10.0 });
/// ```
impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}
