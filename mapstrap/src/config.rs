//! Configuration a map view is constructed from.

use serde::{Deserialize, Serialize};

use crate::error::MapstrapError;
use crate::geo::GeoPoint2d;

/// Deepest zoom level accepted by [`ViewConfig::validate`]. Levels beyond
/// this are not served by common web map providers.
pub const MAX_ZOOM_LEVEL: u32 = 24;

/// Style applied when none is given explicitly.
pub const DEFAULT_STYLE_ID: &str = "roadmap";

/// The fixed set of display parameters used to construct a map view.
///
/// A configuration is built once and handed over to
/// [`MapBootstrapper::initialize`](crate::MapBootstrapper::initialize); the
/// constructed [`Map`](crate::Map) keeps it unchanged as a record of how it
/// was bootstrapped.
///
/// ```
/// use mapstrap::{latlon, ViewConfig};
///
/// let config = ViewConfig::new(latlon!(39.0, -105.0), 7)
///     .with_style_id("terrain")
///     .with_type_control(false);
///
/// assert_eq!(config.zoom_level(), 7);
/// assert_eq!(config.style_id(), "terrain");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    center: GeoPoint2d,
    zoom_level: u32,
    style_id: String,
    show_type_control: bool,
}

impl ViewConfig {
    /// Creates a new configuration with the given center and zoom level.
    ///
    /// The style id defaults to [`DEFAULT_STYLE_ID`] and the type control is
    /// shown by default, matching the defaults of common map providers.
    pub fn new(center: GeoPoint2d, zoom_level: u32) -> Self {
        Self {
            center,
            zoom_level,
            style_id: DEFAULT_STYLE_ID.to_string(),
            show_type_control: true,
        }
    }

    /// Sets the identifier of the base map style (e.g. `"roadmap"` or
    /// `"terrain"`).
    ///
    /// Style ids are opaque to this crate and are not validated; unknown ids
    /// are passed through to whatever renders the base map.
    pub fn with_style_id(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = style_id.into();
        self
    }

    /// Sets whether the control for switching base map styles is shown.
    pub fn with_type_control(mut self, show_type_control: bool) -> Self {
        self.show_type_control = show_type_control;
        self
    }

    /// Center point of the view.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Zoom level of the view.
    pub fn zoom_level(&self) -> u32 {
        self.zoom_level
    }

    /// Identifier of the base map style.
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Whether the control for switching base map styles is shown.
    pub fn show_type_control(&self) -> bool {
        self.show_type_control
    }

    /// Checks that the configuration can be used to construct a map view.
    ///
    /// The zoom level must not exceed [`MAX_ZOOM_LEVEL`], and the center
    /// must be a finite point with latitude in `[-90, 90]` and longitude in
    /// `[-180, 180]`.
    pub fn validate(&self) -> Result<(), MapstrapError> {
        if self.zoom_level > MAX_ZOOM_LEVEL {
            return Err(MapstrapError::Configuration(format!(
                "zoom level {} is outside the supported range 0..={MAX_ZOOM_LEVEL}",
                self.zoom_level
            )));
        }

        let lat = self.center.lat();
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(MapstrapError::Configuration(format!(
                "latitude {lat} is outside the range [-90, 90]"
            )));
        }

        let lon = self.center.lon();
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(MapstrapError::Configuration(format!(
                "longitude {lon} is outside the range [-180, 180]"
            )));
        }

        Ok(())
    }
}
