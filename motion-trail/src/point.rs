//! Recorded trail samples.

use serde::{Deserialize, Serialize};

/// A single recorded position sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    /// Horizontal position in surface units.
    pub x: f64,
    /// Vertical position in surface units.
    pub y: f64,
    /// Caller-supplied processing time (milliseconds) at which the sample was taken.
    pub timestamp: f64,
}

impl TrailPoint {
    /// Create a new sample.
    pub fn new(x: f64, y: f64, timestamp: f64) -> Self {
        Self { x, y, timestamp }
    }

    /// Position as an `(x, y)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
