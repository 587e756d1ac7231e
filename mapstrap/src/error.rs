//! Error types used by the crate.

use thiserror::Error;

use crate::layer::overlay::OverlayFetchError;

/// Mapstrap error type.
#[derive(Debug, Error)]
pub enum MapstrapError {
    /// The target display surface does not exist in the host environment.
    #[error("display surface {0:?} not found")]
    TargetNotFound(String),
    /// The map was configured incorrectly.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// The overlay document could not be fetched or merged.
    #[error("{0}")]
    Overlay(#[from] OverlayFetchError),
}
