//! The trail component.
//!
//! A [`Trail`] combines a [`Sampler`](crate::sampler::Sampler) with the
//! tapering renderer and drives both from a single per-frame
//! [`update`](Trail::update) call. It owns its sample history and a handle
//! to the host [`DrawSurface`]; the surface does the actual drawing.
//!
//! # Lifecycle
//!
//! ```text
//!          record           record
//!   Empty ───────► Partial ───────► Active ──┐ record (evicts at capacity)
//!     ^               │               │  ^───┘
//!     │  clear_trail  │               │
//!     +───────────────+───────────────+
//!
//!   any state ── destroy ──► Destroyed (update fails with TrailError::Destroyed)
//! ```
//!
//! # Example
//!
//! ```
//! use motion_trail::{RecordingSurface, Trail, TrailConfig};
//!
//! let config = TrailConfig::default()
//!     .with_max_points(3)
//!     .with_min_time_between_points(10.0);
//! let mut trail = Trail::new(RecordingSurface::new(), config);
//!
//! for (x, t) in [(0.0, 0.0), (1.0, 5.0), (2.0, 10.0), (3.0, 20.0)] {
//!     trail.update(x, 0.0, t).unwrap();
//! }
//!
//! assert_eq!(trail.len(), 3);
//! assert_eq!(trail.segments_drawn(), 2);
//! ```

use std::fmt;

use crate::config::{TrailConfig, TrailOverrides};
use crate::error::{TrailError, TrailResult};
use crate::point::TrailPoint;
use crate::render;
use crate::sampler::Sampler;
use crate::surface::DrawSurface;

#[cfg(test)]
mod tests;

/// Observable state of a trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailState {
    /// No samples recorded.
    Empty,
    /// One sample recorded; nothing is drawn yet.
    Partial,
    /// Two or more samples; segments are drawn every update.
    Active,
    /// Destroyed; no further updates are accepted.
    Destroyed,
}

impl TrailState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailState::Empty => "empty",
            TrailState::Partial => "partial",
            TrailState::Active => "active",
            TrailState::Destroyed => "destroyed",
        }
    }
}

impl fmt::Display for TrailState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tapering motion trail drawn onto a host surface.
#[derive(Debug)]
pub struct Trail<S: DrawSurface> {
    surface: S,
    config: TrailConfig,
    sampler: Sampler,
    segments_drawn: usize,
    destroyed: bool,
}

impl<S: DrawSurface> Trail<S> {
    /// Create a trail on `surface` and register it with the host.
    pub fn new(mut surface: S, config: TrailConfig) -> Self {
        surface.register();

        tracing::debug!(
            max_points = config.max_points(),
            min_time_between_points = config.min_time_between_points(),
            color = %config.color(),
            "Trail created"
        );
        if !config.can_draw() {
            tracing::warn!(
                max_points = config.max_points(),
                "Trail capacity below 2, nothing will be drawn"
            );
        }

        let sampler = Sampler::new(config.max_points(), config.min_time_between_points());
        Self {
            surface,
            config,
            sampler,
            segments_drawn: 0,
            destroyed: false,
        }
    }

    /// Create a trail from optional overrides layered on the defaults.
    pub fn with_overrides(surface: S, overrides: &TrailOverrides) -> Self {
        Self::new(surface, overrides.resolve())
    }

    /// Feed the followed object's position at processing time `t` (milliseconds).
    ///
    /// Samples the position if the sampling interval allows, then redraws the
    /// whole trail regardless. Returns whether a new sample was recorded.
    ///
    /// # Errors
    ///
    /// [`TrailError::Destroyed`] after [`destroy`](Self::destroy); nothing is
    /// sampled or drawn in that case.
    pub fn update(&mut self, x: f64, y: f64, t: f64) -> TrailResult<bool> {
        if self.destroyed {
            tracing::warn!(x, y, t, "Update on destroyed trail ignored");
            return Err(TrailError::Destroyed);
        }

        let recorded = self.sampler.consider(x, y, t);
        self.segments_drawn =
            render::render(&mut self.surface, self.sampler.history(), &self.config);

        Ok(recorded)
    }

    /// Drop all samples, reset the sampling schedule, and erase the drawing.
    ///
    /// Safe to call at any time. After `destroy` the surface is not touched.
    pub fn clear_trail(&mut self) {
        self.sampler.reset();
        self.segments_drawn = 0;

        if !self.destroyed {
            self.surface.clear();
            tracing::debug!("Trail cleared");
        }
    }

    /// Clear the trail and release host drawing resources.
    ///
    /// Only the first call has an effect.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        self.clear_trail();
        self.surface.release();
        self.destroyed = true;
        tracing::debug!("Trail destroyed");
    }

    pub fn state(&self) -> TrailState {
        if self.destroyed {
            return TrailState::Destroyed;
        }
        match self.sampler.history().len() {
            0 => TrailState::Empty,
            1 => TrailState::Partial,
            _ => TrailState::Active,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Recorded samples, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> + '_ {
        self.sampler.history().iter()
    }

    pub fn len(&self) -> usize {
        self.sampler.history().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sampler.history().is_empty()
    }

    /// Newest sample (the head).
    pub fn head(&self) -> Option<&TrailPoint> {
        self.sampler.history().newest()
    }

    /// Earliest clock value at which the next sample may be recorded.
    pub fn next_creation_time(&self) -> f64 {
        self.sampler.next_creation_time()
    }

    /// Number of segments issued by the most recent redraw.
    pub fn segments_drawn(&self) -> usize {
        self.segments_drawn
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replay the current history onto another surface without touching this
    /// trail's own surface or state.
    pub fn render_to<T: DrawSurface + ?Sized>(&self, target: &mut T) -> usize {
        render::render(target, self.sampler.history(), &self.config)
    }

    /// Give the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
