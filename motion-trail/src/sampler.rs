//! Rate-limited position sampling.
//!
//! The sampler decouples trail density from frame rate: no matter how often
//! the host ticks, a new sample is only recorded once the caller's clock
//! reaches `next_creation_time`, which then advances by the configured
//! interval.

use crate::history::HistoryBuffer;
use crate::point::TrailPoint;

/// Initial value of the scheduling state; the first sample at any `t >= 0` passes.
pub const INITIAL_CREATION_TIME: f64 = 0.0;

/// Decides which positions enter the history.
#[derive(Debug, Clone)]
pub struct Sampler {
    history: HistoryBuffer,
    min_interval: f64,
    next_creation_time: f64,
}

impl Sampler {
    /// Create a sampler with an empty history of `max_points` and the given
    /// minimum interval (milliseconds).
    pub fn new(max_points: usize, min_interval: f64) -> Self {
        Self {
            history: HistoryBuffer::new(max_points),
            min_interval,
            next_creation_time: INITIAL_CREATION_TIME,
        }
    }

    /// Offer a position at clock value `t`. Returns `true` if it was recorded.
    ///
    /// `t` must be non-decreasing across calls. Non-finite inputs are never
    /// recorded.
    pub fn consider(&mut self, x: f64, y: f64, t: f64) -> bool {
        if !(x.is_finite() && y.is_finite() && t.is_finite()) {
            tracing::debug!(x, y, t, "Skipping non-finite trail sample");
            return false;
        }

        if t < self.next_creation_time {
            return false;
        }

        self.next_creation_time = t + self.min_interval;

        let evicted = self.history.push(TrailPoint::new(x, y, t));
        tracing::trace!(
            x,
            y,
            t,
            len = self.history.len(),
            evicted = evicted.is_some(),
            "Recorded trail sample"
        );

        true
    }

    /// Drop all samples and reset the scheduling state.
    pub fn reset(&mut self) {
        self.history.clear();
        self.next_creation_time = INITIAL_CREATION_TIME;
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Earliest clock value at which the next sample may be recorded.
    pub fn next_creation_time(&self) -> f64 {
        self.next_creation_time
    }

    pub fn min_interval(&self) -> f64 {
        self.min_interval
    }
}
