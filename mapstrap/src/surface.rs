//! Display surfaces a map can be attached to.
//!
//! A [`DisplaySurface`] stands for the place a map is shown in: a window, an
//! off-screen buffer, or a test double. Surfaces are looked up by identifier
//! through a [`SurfaceProvider`] when a map is bootstrapped. The crate ships
//! a [`SurfaceRegistry`] as the default provider; applications that already
//! track their windows elsewhere can implement [`SurfaceProvider`] over
//! their own storage instead.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::messenger::Messenger;
use crate::primitives::Size;

/// A place a map view can be displayed in.
///
/// A surface reports its size in pixels so the bootstrapped view can be
/// sized to fit, and receives redraw requests through its [`Messenger`]
/// supertrait whenever the map content changes.
pub trait DisplaySurface: Messenger {
    /// Current size of the surface in pixels.
    fn size(&self) -> Size;
}

/// Resolves surface identifiers to display surfaces.
pub trait SurfaceProvider: Send + Sync {
    /// Returns the surface registered under the given identifier, if any.
    fn surface(&self, target_id: &str) -> Option<Arc<dyn DisplaySurface>>;
}

impl<T: SurfaceProvider + ?Sized> SurfaceProvider for Arc<T> {
    fn surface(&self, target_id: &str) -> Option<Arc<dyn DisplaySurface>> {
        self.as_ref().surface(target_id)
    }
}

/// Default [`SurfaceProvider`] backed by an in-memory identifier map.
///
/// The registry is safe to share between threads; an application typically
/// creates one, registers its surfaces, and hands a clone of it to a
/// [`MapBootstrapper`](crate::MapBootstrapper).
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: RwLock<HashMap<String, Arc<dyn DisplaySurface>>>,
}

impl SurfaceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface under the given identifier.
    ///
    /// If another surface was registered under the same identifier, it is
    /// replaced and returned.
    pub fn register(
        &self,
        target_id: impl Into<String>,
        surface: Arc<dyn DisplaySurface>,
    ) -> Option<Arc<dyn DisplaySurface>> {
        self.surfaces.write().insert(target_id.into(), surface)
    }

    /// Removes the surface registered under the given identifier.
    pub fn remove(&self, target_id: &str) -> Option<Arc<dyn DisplaySurface>> {
        self.surfaces.write().remove(target_id)
    }
}

impl SurfaceProvider for SurfaceRegistry {
    fn surface(&self, target_id: &str) -> Option<Arc<dyn DisplaySurface>> {
        self.surfaces.read().get(target_id).cloned()
    }
}
