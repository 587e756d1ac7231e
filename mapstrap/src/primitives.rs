//! Small value types shared across the crate.

use serde::{Deserialize, Serialize};

/// Size of a display surface or map view, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns true if either dimension is zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}
