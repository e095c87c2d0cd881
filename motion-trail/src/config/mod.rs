//! Trail configuration.
//!
//! A [`TrailConfig`] is resolved once when a trail is constructed and never
//! changes afterwards. Callers either start from [`TrailConfig::default`] and
//! use the `with_*` builders, or collect optional [`TrailOverrides`] (from an
//! INI file, JSON, or CLI flags) and [`resolve`](TrailOverrides::resolve) them
//! onto the defaults.
//!
//! Out-of-range values are clamped rather than rejected:
//!
//! | field | non-finite | out of range |
//! |---|---|---|
//! | `max_points` | 0 (never draws) | negative → 0 |
//! | `min_time_between_points` | NaN/+inf → default | negative → 0 (record every call) |
//! | widths | default | negative → 0 |
//! | alphas | default | clamped to `[0, 1]` |
//!
//! # Example Configuration (INI)
//!
//! ```ini
//! [trail]
//! max_points = 20
//! min_time_between_points = 16
//! base_width = 6
//! tail_width = 0.5
//! base_alpha = 1
//! tail_alpha = 0
//! color = 0xFF8800
//! ```

mod color;
mod file;

pub use color::{Color, ParseColorError};
pub use file::TRAIL_SECTION;

use serde::{Deserialize, Serialize};

/// Default capacity of the history buffer.
pub const DEFAULT_MAX_POINTS: usize = 10;

/// Default minimum interval between recorded samples (milliseconds).
pub const DEFAULT_MIN_TIME_BETWEEN_POINTS: f64 = 50.0;

/// Default segment width at the head (newest end).
pub const DEFAULT_BASE_WIDTH: f64 = 4.0;

/// Default segment width at the tail (oldest end).
pub const DEFAULT_TAIL_WIDTH: f64 = 0.5;

/// Default opacity at the head.
pub const DEFAULT_BASE_ALPHA: f64 = 1.0;

/// Default opacity at the tail.
pub const DEFAULT_TAIL_ALPHA: f64 = 0.0;

/// Resolved, sanitized trail configuration.
///
/// Only serializable: deserialize a [`TrailOverrides`] and resolve it instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailConfig {
    max_points: usize,
    min_time_between_points: f64,
    base_width: f64,
    tail_width: f64,
    base_alpha: f64,
    tail_alpha: f64,
    color: Color,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            min_time_between_points: DEFAULT_MIN_TIME_BETWEEN_POINTS,
            base_width: DEFAULT_BASE_WIDTH,
            tail_width: DEFAULT_TAIL_WIDTH,
            base_alpha: DEFAULT_BASE_ALPHA,
            tail_alpha: DEFAULT_TAIL_ALPHA,
            color: Color::WHITE,
        }
    }
}

impl TrailConfig {
    /// Capacity of the history buffer.
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Minimum time between recorded samples, in milliseconds.
    pub fn min_time_between_points(&self) -> f64 {
        self.min_time_between_points
    }

    /// Width of the newest segment end.
    pub fn base_width(&self) -> f64 {
        self.base_width
    }

    /// Width of the oldest segment end.
    pub fn tail_width(&self) -> f64 {
        self.tail_width
    }

    /// Opacity of the newest segment end.
    pub fn base_alpha(&self) -> f64 {
        self.base_alpha
    }

    /// Opacity of the oldest segment end.
    pub fn tail_alpha(&self) -> f64 {
        self.tail_alpha
    }

    /// Uniform line color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this configuration can ever produce a visible segment.
    pub fn can_draw(&self) -> bool {
        self.max_points >= 2
    }

    /// Set the history capacity.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Set the minimum sampling interval (milliseconds).
    pub fn with_min_time_between_points(mut self, ms: f64) -> Self {
        self.min_time_between_points = sanitize_interval(ms);
        self
    }

    /// Set the head and tail widths.
    pub fn with_widths(mut self, base: f64, tail: f64) -> Self {
        self.base_width = sanitize_width("base_width", base, DEFAULT_BASE_WIDTH);
        self.tail_width = sanitize_width("tail_width", tail, DEFAULT_TAIL_WIDTH);
        self
    }

    /// Set the head and tail opacities.
    pub fn with_alphas(mut self, base: f64, tail: f64) -> Self {
        self.base_alpha = sanitize_alpha("base_alpha", base, DEFAULT_BASE_ALPHA);
        self.tail_alpha = sanitize_alpha("tail_alpha", tail, DEFAULT_TAIL_ALPHA);
        self
    }

    /// Set the line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Convert back into overrides with every field set.
    pub fn to_overrides(&self) -> TrailOverrides {
        TrailOverrides {
            max_points: Some(self.max_points as f64),
            min_time_between_points: Some(self.min_time_between_points),
            base_width: Some(self.base_width),
            tail_width: Some(self.tail_width),
            base_alpha: Some(self.base_alpha),
            tail_alpha: Some(self.tail_alpha),
            color: Some(self.color),
        }
    }
}

/// Caller-supplied configuration; every field is optional and independently
/// defaulted.
///
/// Numeric fields are plain `f64` so that values from loosely typed sources
/// (INI files, JSON) can be clamped instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailOverrides {
    pub max_points: Option<f64>,
    pub min_time_between_points: Option<f64>,
    pub base_width: Option<f64>,
    pub tail_width: Option<f64>,
    pub base_alpha: Option<f64>,
    pub tail_alpha: Option<f64>,
    pub color: Option<Color>,
}

impl TrailOverrides {
    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(mut self, other: TrailOverrides) -> Self {
        self.max_points = other.max_points.or(self.max_points);
        self.min_time_between_points = other
            .min_time_between_points
            .or(self.min_time_between_points);
        self.base_width = other.base_width.or(self.base_width);
        self.tail_width = other.tail_width.or(self.tail_width);
        self.base_alpha = other.base_alpha.or(self.base_alpha);
        self.tail_alpha = other.tail_alpha.or(self.tail_alpha);
        self.color = other.color.or(self.color);
        self
    }

    /// Resolve onto the defaults, clamping anything out of range.
    pub fn resolve(&self) -> TrailConfig {
        let defaults = TrailConfig::default();
        TrailConfig {
            max_points: self
                .max_points
                .map(sanitize_max_points)
                .unwrap_or(defaults.max_points),
            min_time_between_points: self
                .min_time_between_points
                .map(sanitize_interval)
                .unwrap_or(defaults.min_time_between_points),
            base_width: self
                .base_width
                .map(|w| sanitize_width("base_width", w, DEFAULT_BASE_WIDTH))
                .unwrap_or(defaults.base_width),
            tail_width: self
                .tail_width
                .map(|w| sanitize_width("tail_width", w, DEFAULT_TAIL_WIDTH))
                .unwrap_or(defaults.tail_width),
            base_alpha: self
                .base_alpha
                .map(|a| sanitize_alpha("base_alpha", a, DEFAULT_BASE_ALPHA))
                .unwrap_or(defaults.base_alpha),
            tail_alpha: self
                .tail_alpha
                .map(|a| sanitize_alpha("tail_alpha", a, DEFAULT_TAIL_ALPHA))
                .unwrap_or(defaults.tail_alpha),
            color: self.color.unwrap_or(defaults.color),
        }
    }
}

fn sanitize_max_points(raw: f64) -> usize {
    if !raw.is_finite() || raw < 0.0 {
        tracing::warn!(value = raw, "max_points out of range, trail will never draw");
        return 0;
    }
    // Saturating float-to-int cast.
    raw.floor() as usize
}

fn sanitize_interval(raw: f64) -> f64 {
    if raw.is_nan() || raw == f64::INFINITY {
        tracing::warn!(
            value = raw,
            default = DEFAULT_MIN_TIME_BETWEEN_POINTS,
            "min_time_between_points is not finite, using default"
        );
        DEFAULT_MIN_TIME_BETWEEN_POINTS
    } else if raw < 0.0 {
        tracing::warn!(
            value = raw,
            "min_time_between_points is negative, recording every update"
        );
        0.0
    } else {
        raw
    }
}

fn sanitize_width(key: &str, raw: f64, default: f64) -> f64 {
    if !raw.is_finite() {
        tracing::warn!(key, value = raw, default, "width is not finite, using default");
        default
    } else if raw < 0.0 {
        tracing::warn!(key, value = raw, "width is negative, clamping to 0");
        0.0
    } else {
        raw
    }
}

fn sanitize_alpha(key: &str, raw: f64, default: f64) -> f64 {
    if !raw.is_finite() {
        tracing::warn!(key, value = raw, default, "alpha is not finite, using default");
        default
    } else if !(0.0..=1.0).contains(&raw) {
        tracing::warn!(key, value = raw, "alpha outside [0, 1], clamping");
        raw.clamp(0.0, 1.0)
    } else {
        raw
    }
}
