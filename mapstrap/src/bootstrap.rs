//! Construction of maps bound to display surfaces.

use std::sync::Arc;

use crate::config::ViewConfig;
use crate::error::MapstrapError;
use crate::layer::overlay::{self, HttpOverlayLoader, OverlayLoader, OverlayTask};
use crate::layer::DataLayer;
use crate::map::Map;
use crate::surface::SurfaceProvider;
use crate::view::MapView;

/// Constructs maps bound to display surfaces.
///
/// A bootstrapper holds the surface provider used to resolve target
/// identifiers and the loader used to fetch overlay documents. It has no
/// other state: every [`initialize`](MapBootstrapper::initialize) call
/// produces a fresh, independent [`MapHandle`], and nothing is shared
/// between calls.
pub struct MapBootstrapper {
    surfaces: Arc<dyn SurfaceProvider>,
    loader: Arc<dyn OverlayLoader>,
}

impl MapBootstrapper {
    /// Creates a bootstrapper resolving surfaces through the given provider.
    ///
    /// Overlays are fetched with the default [`HttpOverlayLoader`].
    pub fn new(surfaces: impl SurfaceProvider + 'static) -> Self {
        Self {
            surfaces: Arc::new(surfaces),
            loader: Arc::new(HttpOverlayLoader::new()),
        }
    }

    /// Replaces the loader used to fetch overlay documents.
    pub fn with_overlay_loader(mut self, loader: impl OverlayLoader + 'static) -> Self {
        self.loader = Arc::new(loader);
        self
    }

    /// Constructs a map on the given target surface and starts loading its
    /// overlay.
    ///
    /// The returned handle owns the constructed [`Map`] and the
    /// [`OverlayTask`] observing the overlay fetch. The fetch runs in the
    /// background on the ambient tokio runtime; this method never waits on
    /// the network, and an overlay that later fails to load leaves the base
    /// map intact (the failure is logged and reported through the task).
    ///
    /// # Errors
    ///
    /// - [`MapstrapError::TargetNotFound`] if `target_element_id` does not
    ///   resolve to a registered surface. No map is produced and no fetch is
    ///   started.
    /// - [`MapstrapError::Configuration`] if the configuration fails
    ///   [`ViewConfig::validate`] or `overlay_url` is not a valid URL.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context, as the overlay
    /// fetch task has nowhere to run.
    pub fn initialize(
        &self,
        target_element_id: &str,
        config: ViewConfig,
        overlay_url: &str,
    ) -> Result<MapHandle, MapstrapError> {
        let surface = self
            .surfaces
            .surface(target_element_id)
            .ok_or_else(|| MapstrapError::TargetNotFound(target_element_id.to_string()))?;

        config.validate()?;

        if let Err(error) = reqwest::Url::parse(overlay_url) {
            return Err(MapstrapError::Configuration(format!(
                "invalid overlay url {overlay_url:?}: {error}"
            )));
        }

        let data = Arc::new(DataLayer::new());
        data.set_messenger(Box::new(surface.clone()));

        let view = MapView::new(config.center(), config.zoom_level()).with_size(surface.size());
        let map = Map::new(config, view, data.clone(), Some(Box::new(surface)));

        let overlay = overlay::spawn_fetch(self.loader.clone(), overlay_url, data);

        Ok(MapHandle { map, overlay })
    }
}

/// A bootstrapped map together with its overlay fetch.
///
/// The handle is owned by the caller; dropping it drops the map. The
/// overlay fetch keeps running to completion either way, but its merge
/// target goes away with the map's data layer, so a dropped handle leaks
/// nothing.
pub struct MapHandle {
    map: Map,
    overlay: OverlayTask,
}

impl MapHandle {
    /// The bootstrapped map.
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Mutable access to the bootstrapped map.
    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    /// Observer of the overlay fetch spawned for this map.
    pub fn overlay(&self) -> &OverlayTask {
        &self.overlay
    }

    /// Mutable access to the overlay fetch observer, e.g. for polling with
    /// [`OverlayTask::try_outcome`].
    pub fn overlay_mut(&mut self) -> &mut OverlayTask {
        &mut self.overlay
    }

    /// Splits the handle into the map and the overlay task.
    pub fn into_parts(self) -> (Map, OverlayTask) {
        (self.map, self.overlay)
    }
}
