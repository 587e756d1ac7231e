//! Map view state.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint2d;
use crate::primitives::Size;

/// Resolution of zoom level 0 of the standard web tile schema, in meters per
/// pixel at the equator.
const BASE_RESOLUTION: f64 = 156543.03392800014;

/// State of the currently displayed portion of a map.
///
/// A view is a plain value. Changing the view of a [`Map`](crate::Map) is
/// done by replacing it with a copy produced by one of the `with_*` methods:
///
/// ```no_run
/// use mapstrap::{latlon, MapView};
///
/// let view = MapView::new(latlon!(39.0, -105.0), 7);
/// let zoomed_in = view.with_zoom_level(8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    center: GeoPoint2d,
    zoom_level: u32,
    size: Size,
}

impl MapView {
    /// Creates a new view centered on the given point.
    ///
    /// The size of the view is zero until it is bound to a display surface
    /// with [`MapView::with_size`].
    pub fn new(center: GeoPoint2d, zoom_level: u32) -> Self {
        Self {
            center,
            zoom_level,
            size: Size::default(),
        }
    }

    /// Center point of the view.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Zoom level of the view.
    pub fn zoom_level(&self) -> u32 {
        self.zoom_level
    }

    /// Size of the view in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resolution of the view in meters per pixel at the equator, assuming
    /// the standard web tile schema.
    pub fn resolution(&self) -> f64 {
        BASE_RESOLUTION / f64::powi(2.0, self.zoom_level as i32)
    }

    /// Returns a copy of the view centered on the given point.
    pub fn with_center(&self, center: GeoPoint2d) -> Self {
        Self { center, ..*self }
    }

    /// Returns a copy of the view with the given zoom level.
    pub fn with_zoom_level(&self, zoom_level: u32) -> Self {
        Self {
            zoom_level,
            ..*self
        }
    }

    /// Returns a copy of the view with the given size.
    pub fn with_size(&self, size: Size) -> Self {
        Self { size, ..*self }
    }
}
