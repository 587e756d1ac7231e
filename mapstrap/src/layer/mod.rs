//! Map layers and the overlay pipeline that feeds them.

pub mod data_layer;
pub mod overlay;

pub use data_layer::DataLayer;
pub use overlay::{
    HttpOverlayLoader, OverlayFetchError, OverlayLoader, OverlayMerge, OverlayTask,
};
