//! Geographic coordinates used to position map views.

use serde::{Deserialize, Serialize};

/// 2d point on the surface of the Earth, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a new point from latitude and longitude values (in degrees).
    ///
    /// No range checking is done here. Out-of-range points are rejected when
    /// a [`ViewConfig`](crate::ViewConfig) containing them is validated.
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Creates a new [`GeoPoint2d`] from latitude and longitude values (in degrees).
///
/// ```
/// use mapstrap::latlon;
///
/// let point = latlon!(39.0, -105.0);
/// assert_eq!(point.lat(), 39.0);
/// assert_eq!(point.lon(), -105.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::GeoPoint2d::latlon($lat, $lon)
    };
}
