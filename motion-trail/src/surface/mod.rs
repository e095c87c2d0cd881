//! Host drawing surface abstraction.
//!
//! A trail never owns pixels. It issues commands to whatever the host hands
//! it through the [`DrawSurface`] trait, so the sampling and tapering logic
//! stays independent of any rendering backend.
//!
//! # Implementations
//!
//! - [`RecordingSurface`]: keeps the issued commands in memory (tests, debugging)
//! - [`PixmapSurface`]: rasterizes into a `tiny-skia` pixmap

mod pixmap;
mod recording;

pub use pixmap::PixmapSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::config::Color;

/// Minimal capability set a host surface must offer.
pub trait DrawSurface {
    /// Erase everything previously drawn for this object.
    fn clear(&mut self);

    /// Set the style used by subsequent [`draw_line_segment`](Self::draw_line_segment) calls.
    ///
    /// `alpha` is in `[0, 1]`.
    fn set_line_style(&mut self, width: f64, color: Color, alpha: f64);

    /// Draw a straight segment with the current line style.
    fn draw_line_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Called once when a trail is constructed on this surface.
    ///
    /// Hosts that keep a scene or render graph add the object here.
    fn register(&mut self) {}

    /// Called once when the owning trail is destroyed.
    ///
    /// Hosts free any drawing resources tied to the object here.
    fn release(&mut self) {}
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn set_line_style(&mut self, width: f64, color: Color, alpha: f64) {
        (**self).set_line_style(width, color, alpha)
    }

    fn draw_line_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        (**self).draw_line_segment(x1, y1, x2, y2)
    }

    fn register(&mut self) {
        (**self).register()
    }

    fn release(&mut self) {
        (**self).release()
    }
}
