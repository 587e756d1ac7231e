//! Remote GeoJSON overlay loading.
//!
//! An overlay is a remote GeoJSON document merged into a map's
//! [`DataLayer`] during bootstrap. The fetch runs as a background task so
//! initialization never waits on the network; its outcome is observable
//! through the [`OverlayTask`] stored in the returned map handle.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use geojson::{Feature, GeoJson};
use log::info;
use thiserror::Error;
use tokio::sync::oneshot;

use crate::async_runtime;
use crate::layer::data_layer::DataLayer;

/// Error that can occur when trying to load an overlay document.
///
/// None of these are fatal to the map the overlay was requested for: the
/// base map stays presentable, the failure is logged, and the error is
/// reported through the [`OverlayTask`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayFetchError {
    /// Could not connect to the remote server.
    #[error("could not connect to the overlay server")]
    Network,
    /// The remote server responded with a non-success status code.
    #[error("overlay server responded with status {0}")]
    Status(u16),
    /// Failed to decode a GeoJSON document from the response body.
    #[error("failed to decode overlay document: {0}")]
    Decoding(String),
    /// The fetch task was torn down before it could report an outcome.
    #[error("overlay fetch was interrupted")]
    Interrupted,
}

/// Loader for overlay documents.
///
/// The bootstrapper fetches overlays through this trait, so tests and
/// offline hosts can substitute their own source for the default
/// [`HttpOverlayLoader`].
#[async_trait]
pub trait OverlayLoader: Send + Sync {
    /// Load the raw overlay document from the given location.
    async fn load(&self, url: &str) -> Result<Bytes, OverlayFetchError>;
}

/// Loads overlay documents over HTTP.
pub struct HttpOverlayLoader {
    http_client: reqwest::Client,
}

impl HttpOverlayLoader {
    /// Creates a loader with the crate's default HTTP client.
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("mapstrap/0.1")
            .build()
            .expect("failed to initialize HTTP client");

        Self { http_client }
    }
}

impl Default for HttpOverlayLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OverlayLoader for HttpOverlayLoader {
    async fn load(&self, url: &str) -> Result<Bytes, OverlayFetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|_| OverlayFetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            info!("Failed to load {url}: {status}");
            return Err(OverlayFetchError::Status(status.as_u16()));
        }

        response
            .bytes()
            .await
            .map_err(|_| OverlayFetchError::Network)
    }
}

/// Result of a completed overlay merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayMerge {
    /// Number of features the merge added to the data layer.
    pub feature_count: usize,
}

/// Observable handle to a spawned overlay fetch.
///
/// The task keeps running whether or not it is observed; dropping the handle
/// does not cancel the fetch, and a successful merge still lands in the
/// map's data layer. [`outcome`](OverlayTask::outcome) awaits the result,
/// [`try_outcome`](OverlayTask::try_outcome) polls for it without blocking.
pub struct OverlayTask {
    url: String,
    rx: oneshot::Receiver<Result<OverlayMerge, OverlayFetchError>>,
    outcome: Option<Result<OverlayMerge, OverlayFetchError>>,
}

impl OverlayTask {
    /// Location the overlay was requested from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Waits for the fetch to complete and returns its outcome.
    pub async fn outcome(self) -> Result<OverlayMerge, OverlayFetchError> {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        self.rx
            .await
            .unwrap_or(Err(OverlayFetchError::Interrupted))
    }

    /// Returns the outcome of the fetch if it has completed.
    ///
    /// Returns `None` while the fetch is still in flight. Once an outcome
    /// was observed, it is retained and returned by every later call.
    pub fn try_outcome(&mut self) -> Option<Result<OverlayMerge, OverlayFetchError>> {
        if let Some(outcome) = &self.outcome {
            return Some(outcome.clone());
        }

        let outcome = match self.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => Err(OverlayFetchError::Interrupted),
        };

        self.outcome = Some(outcome.clone());
        Some(outcome)
    }
}

/// Spawns the fetch-decode-merge task for the given overlay location.
///
/// The merge targets only the data layer the task was spawned with, so
/// overlapping bootstraps cannot write into each other's maps.
pub(crate) fn spawn_fetch(
    loader: Arc<dyn OverlayLoader>,
    url: &str,
    data: Arc<DataLayer>,
) -> OverlayTask {
    let (tx, rx) = oneshot::channel();
    let url = url.to_string();

    let task_url = url.clone();
    async_runtime::spawn(async move {
        let outcome = fetch_and_merge(&*loader, &task_url, &data).await;

        match &outcome {
            Ok(merge) => info!(
                "Merged {} features from overlay {task_url}",
                merge.feature_count
            ),
            Err(error) => log::warn!("Failed to load overlay from {task_url}: {error}"),
        }

        // The receiver may be gone; the merge already landed in the layer.
        let _ = tx.send(outcome);
    });

    OverlayTask {
        url,
        rx,
        outcome: None,
    }
}

async fn fetch_and_merge(
    loader: &dyn OverlayLoader,
    url: &str,
    data: &DataLayer,
) -> Result<OverlayMerge, OverlayFetchError> {
    let bytes = loader.load(url).await?;
    let features = decode_document(&bytes)?;
    let feature_count = data.merge(features);

    Ok(OverlayMerge { feature_count })
}

/// Decodes a GeoJSON document into the features to merge.
///
/// Accepts a feature collection, a single feature, or a bare geometry; a
/// bare geometry is wrapped into a feature without properties.
fn decode_document(bytes: &Bytes) -> Result<Vec<Feature>, OverlayFetchError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| OverlayFetchError::Decoding("document is not valid UTF-8".to_string()))?;

    let geojson = text
        .parse::<GeoJson>()
        .map_err(|err| OverlayFetchError::Decoding(err.to_string()))?;

    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: None,
            foreign_members: None,
        }],
    };

    Ok(features)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::tests::{FailingLoader, GatedLoader, StaticLoader, FIXTURE_GEOJSON};

    #[test]
    fn decode_accepts_feature_collection() {
        let features = decode_document(&Bytes::from_static(FIXTURE_GEOJSON.as_bytes()))
            .expect("fixture must decode");
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn decode_accepts_single_feature() {
        let document = r#"{"type": "Feature", "properties": {"name": "Denver"}, "geometry": {"type": "Point", "coordinates": [-105.0, 39.7]}}"#;
        let features =
            decode_document(&Bytes::from(document.to_string())).expect("feature must decode");

        assert_eq!(features.len(), 1);
        assert!(features[0].geometry.is_some());
    }

    #[test]
    fn decode_wraps_bare_geometry_into_feature() {
        let document = r#"{"type": "Point", "coordinates": [-105.0, 39.7]}"#;
        let features =
            decode_document(&Bytes::from(document.to_string())).expect("geometry must decode");

        assert_eq!(features.len(), 1);
        assert!(features[0].geometry.is_some());
        assert!(features[0].properties.is_none());
    }

    #[test]
    fn decode_rejects_non_geojson_body() {
        let result = decode_document(&Bytes::from_static(b"<html>not found</html>"));
        assert_matches!(result, Err(OverlayFetchError::Decoding(_)));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let result = decode_document(&Bytes::from_static(&[0xff, 0xfe, 0x00]));
        assert_matches!(result, Err(OverlayFetchError::Decoding(_)));
    }

    #[test]
    fn task_reports_merge_outcome() {
        tokio_test::block_on(async {
            let data = Arc::new(DataLayer::new());
            let task = spawn_fetch(
                Arc::new(StaticLoader::fixture()),
                "fixture://overlay",
                data.clone(),
            );

            let merge = task.outcome().await.expect("fetch must succeed");
            assert_eq!(merge.feature_count, 2);
            assert_eq!(data.len(), 2);
        });
    }

    #[test]
    fn task_reports_fetch_failure_and_layer_stays_empty() {
        tokio_test::block_on(async {
            let data = Arc::new(DataLayer::new());
            let task = spawn_fetch(
                Arc::new(FailingLoader(OverlayFetchError::Status(404))),
                "fixture://missing",
                data.clone(),
            );

            assert_matches!(task.outcome().await, Err(OverlayFetchError::Status(404)));
            assert!(data.is_empty());
        });
    }

    #[test]
    fn try_outcome_is_none_while_fetch_in_flight() {
        tokio_test::block_on(async {
            let (loader, gate) = GatedLoader::new();
            let data = Arc::new(DataLayer::new());
            let mut task = spawn_fetch(Arc::new(loader), "fixture://gated", data.clone());

            assert!(task.try_outcome().is_none());

            gate.send(()).expect("fetch task must be alive");
            let merge = task.outcome().await.expect("fetch must succeed");
            assert_eq!(merge.feature_count, 2);
        });
    }

    #[test]
    fn try_outcome_retains_observed_result() {
        tokio_test::block_on(async {
            let data = Arc::new(DataLayer::new());
            let mut task = spawn_fetch(
                Arc::new(StaticLoader::fixture()),
                "fixture://overlay",
                data.clone(),
            );

            while task.try_outcome().is_none() {
                tokio::task::yield_now().await;
            }

            let first = task.try_outcome().expect("outcome must be retained");
            let second = task.try_outcome().expect("outcome must be retained");
            assert_eq!(first, second);
        });
    }

    #[test]
    fn outcome_reports_interruption_when_runtime_is_dropped() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build runtime");

        let (loader, _gate) = GatedLoader::new();
        let data = Arc::new(DataLayer::new());
        let task = runtime
            .block_on(async { spawn_fetch(Arc::new(loader), "fixture://gated", data.clone()) });

        drop(runtime);

        assert_matches!(tokio_test::block_on(task.outcome()), Err(OverlayFetchError::Interrupted));
        assert!(data.is_empty());
    }

    #[test]
    fn try_outcome_reports_interruption_when_runtime_is_dropped() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build runtime");

        let (loader, _gate) = GatedLoader::new();
        let data = Arc::new(DataLayer::new());
        let mut task = runtime
            .block_on(async { spawn_fetch(Arc::new(loader), "fixture://gated", data.clone()) });

        assert!(task.try_outcome().is_none());

        drop(runtime);

        assert_matches!(task.try_outcome(), Some(Err(OverlayFetchError::Interrupted)));
        assert_matches!(task.try_outcome(), Some(Err(OverlayFetchError::Interrupted)));
    }

    #[test]
    fn dropped_task_handle_does_not_cancel_merge() {
        tokio_test::block_on(async {
            let data = Arc::new(DataLayer::new());
            let task = spawn_fetch(
                Arc::new(StaticLoader::fixture()),
                "fixture://overlay",
                data.clone(),
            );
            drop(task);

            while data.is_empty() {
                tokio::task::yield_now().await;
            }

            assert_eq!(data.len(), 2);
        });
    }
}
