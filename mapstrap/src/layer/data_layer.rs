//! Feature store that overlay documents are merged into.

use geojson::Feature;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::messenger::Messenger;

/// The feature store of a map.
///
/// Overlay documents fetched during bootstrap are merged into the map's data
/// layer, and hosts can merge locally produced features through the same
/// method. The layer is thread-safe so merges can happen from the overlay
/// fetch task after [`initialize`](crate::MapBootstrapper::initialize) has
/// returned.
///
/// Merging never replaces existing content. Every merge appends to the
/// store and requests a redraw through the layer's messenger, if one is set.
#[derive(Default)]
pub struct DataLayer {
    features: RwLock<Vec<Feature>>,
    messenger: RwLock<Option<Box<dyn Messenger>>>,
}

impl DataLayer {
    /// Creates an empty layer with no messenger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the given features to the layer and returns how many were
    /// added.
    ///
    /// Requests a redraw when at least one feature was added.
    pub fn merge(&self, features: Vec<Feature>) -> usize {
        let count = features.len();
        if count == 0 {
            return 0;
        }

        self.features.write().extend(features);

        if let Some(messenger) = &(*self.messenger.read()) {
            messenger.request_redraw();
        }

        count
    }

    /// Read access to the stored features.
    ///
    /// The returned guard holds a read lock; merges block until it is
    /// dropped.
    pub fn features(&self) -> RwLockReadGuard<'_, Vec<Feature>> {
        self.features.read()
    }

    /// Number of features in the layer.
    pub fn len(&self) -> usize {
        self.features.read().len()
    }

    /// Returns true if no features have been merged yet.
    pub fn is_empty(&self) -> bool {
        self.features.read().is_empty()
    }

    /// Sets the messenger the layer requests redraws through.
    pub fn set_messenger(&self, messenger: Box<dyn Messenger>) {
        *self.messenger.write() = Some(messenger);
    }
}
