use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::layer::overlay::{OverlayFetchError, OverlayLoader};
use crate::messenger::Messenger;
use crate::primitives::Size;
use crate::surface::DisplaySurface;

/// GeoJSON feature collection with one point and one polygon.
pub const FIXTURE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Denver", "kind": "city" },
      "geometry": { "type": "Point", "coordinates": [-104.9903, 39.7392] }
    },
    {
      "type": "Feature",
      "properties": { "name": "City Park", "kind": "park" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [
          [
            [-104.9602, 39.7441],
            [-104.9403, 39.7441],
            [-104.9403, 39.7547],
            [-104.9602, 39.7547],
            [-104.9602, 39.7441]
          ]
        ]
      }
    }
  ]
}"#;

pub struct TestSurface {
    size: Size,
    redraws: AtomicUsize,
}

impl TestSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            redraws: AtomicUsize::new(0),
        }
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws.load(Ordering::SeqCst)
    }
}

impl Messenger for TestSurface {
    fn request_redraw(&self) {
        self.redraws.fetch_add(1, Ordering::SeqCst);
    }
}

impl DisplaySurface for TestSurface {
    fn size(&self) -> Size {
        self.size
    }
}

pub struct StaticLoader(pub Bytes);

impl StaticLoader {
    pub fn fixture() -> Self {
        Self(Bytes::from_static(FIXTURE_GEOJSON.as_bytes()))
    }
}

#[async_trait]
impl OverlayLoader for StaticLoader {
    async fn load(&self, _url: &str) -> Result<Bytes, OverlayFetchError> {
        Ok(self.0.clone())
    }
}

pub struct FailingLoader(pub OverlayFetchError);

#[async_trait]
impl OverlayLoader for FailingLoader {
    async fn load(&self, _url: &str) -> Result<Bytes, OverlayFetchError> {
        Err(self.0.clone())
    }
}

/// Loader that blocks until the returned sender fires, so tests can observe
/// a fetch that is still in flight.
pub struct GatedLoader {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    bytes: Bytes,
}

impl GatedLoader {
    pub fn new() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let loader = Self {
            gate: Mutex::new(Some(rx)),
            bytes: Bytes::from_static(FIXTURE_GEOJSON.as_bytes()),
        };

        (loader, tx)
    }
}

#[async_trait]
impl OverlayLoader for GatedLoader {
    async fn load(&self, _url: &str) -> Result<Bytes, OverlayFetchError> {
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        Ok(self.bytes.clone())
    }
}
