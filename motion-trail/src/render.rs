//! Tapering segment renderer.
//!
//! With `n` samples there are `n - 1` segments. Segment `i` (0 = oldest) is
//! styled at `frac = i / (n - 1)`:
//!
//! ```text
//! width = tail_width + frac * (base_width - tail_width)
//! alpha = tail_alpha + frac * (base_alpha - tail_alpha)
//! ```
//!
//! The newest segment sits at `(n - 2) / (n - 1)`, so the configured head
//! values themselves are approached but never drawn.

use crate::config::{Color, TrailConfig};
use crate::history::HistoryBuffer;
use crate::point::TrailPoint;
use crate::surface::DrawSurface;

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Line style of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    pub width: f64,
    pub color: Color,
    pub alpha: f64,
}

/// One styled chord between adjacent samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: TrailPoint,
    pub to: TrailPoint,
    pub style: SegmentStyle,
}

/// Style of segment `index` in a trail of `point_count` samples.
pub fn taper(config: &TrailConfig, index: usize, point_count: usize) -> SegmentStyle {
    let frac = if point_count > 1 {
        index as f64 / (point_count - 1) as f64
    } else {
        0.0
    };

    SegmentStyle {
        width: lerp(config.tail_width(), config.base_width(), frac),
        color: config.color(),
        alpha: lerp(config.tail_alpha(), config.base_alpha(), frac),
    }
}

/// Styled segments for the current history, oldest first.
///
/// Empty when fewer than two samples exist.
pub fn segments<'a>(
    history: &'a HistoryBuffer,
    config: &'a TrailConfig,
) -> impl Iterator<Item = Segment> + 'a {
    let n = history.len();
    history
        .pairs()
        .enumerate()
        .map(move |(i, (from, to))| Segment {
            from: *from,
            to: *to,
            style: taper(config, i, n),
        })
}

/// Erase the surface and redraw the whole trail. Returns the number of
/// segments issued.
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    history: &HistoryBuffer,
    config: &TrailConfig,
) -> usize {
    surface.clear();

    if history.len() < 2 {
        return 0;
    }

    let mut drawn = 0;
    for segment in segments(history, config) {
        let SegmentStyle {
            width,
            color,
            alpha,
        } = segment.style;
        surface.set_line_style(width, color, alpha);
        surface.draw_line_segment(segment.from.x, segment.from.y, segment.to.x, segment.to.y);
        drawn += 1;
    }
    drawn
}
