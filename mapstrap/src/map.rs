//! Map state produced by a bootstrap.

use std::sync::Arc;

use crate::config::ViewConfig;
use crate::layer::DataLayer;
use crate::messenger::Messenger;
use crate::primitives::Size;
use crate::view::MapView;

/// A map bound to a display surface.
///
/// Holds the configuration the map was bootstrapped with, the live view
/// state, and the data layer that overlays merge into. The map does not
/// render anything itself; it requests redraws through its messenger and
/// leaves presentation to the host.
pub struct Map {
    config: ViewConfig,
    view: MapView,
    data: Arc<DataLayer>,
    messenger: Option<Box<dyn Messenger>>,
}

impl Map {
    /// Creates a new map.
    pub fn new(
        config: ViewConfig,
        view: MapView,
        data: Arc<DataLayer>,
        messenger: Option<Box<dyn Messenger + 'static>>,
    ) -> Self {
        Self {
            config,
            view,
            data,
            messenger,
        }
    }

    /// Configuration the map was bootstrapped with.
    ///
    /// Kept unchanged for the map's lifetime, even after the view moves.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Current view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Changes the view of the map to the given one.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
        self.redraw();
    }

    /// Requests redraw of the map.
    pub fn redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw()
        }
    }

    /// Sets the size of the map.
    pub fn set_size(&mut self, new_size: Size) {
        self.view = self.view.with_size(new_size);
    }

    /// The map's data layer.
    pub fn data(&self) -> &DataLayer {
        &self.data
    }

    /// Shared handle to the map's data layer.
    pub fn data_handle(&self) -> Arc<DataLayer> {
        self.data.clone()
    }

    /// Sets the new event messenger for the map.
    pub fn set_messenger(&mut self, messenger: Option<impl Messenger + 'static>) {
        self.messenger = match messenger {
            Some(m) => Some(Box::new(m)),
            None => None,
        };
    }
}
