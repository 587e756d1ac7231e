//! Mapstrap constructs map views bound to host display surfaces and loads
//! remote GeoJSON overlays into them. It contains no renderer: the host owns
//! the screen, registers its render targets as surfaces, and gets redraw
//! requests whenever map state changes.
//!
//! # Quick start
//!
//! Bootstrapping a map over a registered surface takes this code:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mapstrap::{latlon, MapBootstrapper, SurfaceRegistry, ViewConfig};
//!
//! # struct Window;
//! # impl mapstrap::Messenger for Window {
//! #     fn request_redraw(&self) {}
//! # }
//! # impl mapstrap::DisplaySurface for Window {
//! #     fn size(&self) -> mapstrap::Size {
//! #         mapstrap::Size::new(800.0, 600.0)
//! #     }
//! # }
//! # tokio_test::block_on(async {
//! let registry = Arc::new(SurfaceRegistry::new());
//! registry.register("map", Arc::new(Window));
//!
//! let handle = MapBootstrapper::new(registry)
//!     .initialize(
//!         "map",
//!         ViewConfig::new(latlon!(39.0, -105.0), 7)
//!             .with_style_id("terrain")
//!             .with_type_control(false),
//!         "https://storage.googleapis.com/mapsdevsite/json/google.json",
//!     )
//!     .expect("the map surface is registered");
//!
//! let (map, overlay) = handle.into_parts();
//! if let Ok(merge) = overlay.outcome().await {
//!     println!("overlay added {} features", merge.feature_count);
//! }
//! assert_eq!(map.view().zoom_level(), 7);
//! # });
//! ```
//!
//! This constructs a map centered on Colorado, sized to the `"map"` surface,
//! and starts fetching the overlay document in the background. `initialize`
//! returns as soon as the map exists; the fetched features are merged into
//! the map's data layer when they arrive, and the surface gets a redraw
//! request.
//!
//! # Main components
//!
//! * [`MapBootstrapper`] resolves a target surface, validates the
//!   [`ViewConfig`], and produces a [`MapHandle`]. Each call is independent:
//!   there is no implicit current map, and overlapping bootstraps cannot
//!   interfere with each other.
//! * [`Map`] holds the bootstrap configuration, the live [`MapView`], and
//!   the [`DataLayer`](layer::DataLayer) overlays merge into.
//! * [`OverlayTask`](layer::OverlayTask) observes the background fetch. A
//!   failed fetch never removes the base map; it is logged and reported
//!   through the task as an [`OverlayFetchError`](layer::OverlayFetchError).
//! * [`surface`] connects the crate to the host: implement
//!   [`DisplaySurface`](surface::DisplaySurface) for your render target and
//!   register it with a [`SurfaceRegistry`](surface::SurfaceRegistry), or
//!   implement [`SurfaceProvider`](surface::SurfaceProvider) over your own
//!   window bookkeeping.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub(crate) mod async_runtime;
mod bootstrap;
mod config;
pub mod error;
mod geo;
pub mod layer;
mod map;
mod messenger;
mod primitives;
pub mod surface;
mod view;

#[cfg(test)]
mod tests;

pub use bootstrap::{MapBootstrapper, MapHandle};
pub use config::{ViewConfig, DEFAULT_STYLE_ID, MAX_ZOOM_LEVEL};
pub use error::MapstrapError;
pub use geo::GeoPoint2d;
pub use layer::{DataLayer, OverlayFetchError, OverlayLoader, OverlayMerge, OverlayTask};
pub use map::Map;
pub use messenger::{DummyMessenger, Messenger};
pub use primitives::Size;
pub use surface::{DisplaySurface, SurfaceProvider, SurfaceRegistry};
pub use view::MapView;

// Reexport geojson types used in the public API
pub use geojson;
