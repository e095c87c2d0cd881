//! Raster surface backed by a `tiny-skia` pixmap.

use std::path::Path;

use image::RgbaImage;
use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::DrawSurface;
use crate::config::Color;
use crate::error::{TrailError, TrailResult};

/// Rasterizes trail segments into an RGBA pixmap.
///
/// Segments are anti-aliased with round caps so that consecutive chords join
/// without visible notches.
#[derive(Debug)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    background: tiny_skia::Color,
    paint: Paint<'static>,
    stroke: Stroke,
    visible: bool,
}

impl PixmapSurface {
    /// Create a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> TrailResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            TrailError::Image(format!("Invalid surface size {}x{}", width, height))
        })?;

        let mut paint = Paint::default();
        paint.anti_alias = true;

        let stroke = Stroke {
            line_cap: LineCap::Round,
            ..Stroke::default()
        };

        Ok(Self {
            pixmap,
            background: tiny_skia::Color::TRANSPARENT,
            paint,
            stroke,
            visible: false,
        })
    }

    /// Use an opaque background color for `clear`.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = tiny_skia::Color::from_rgba8(color.r(), color.g(), color.b(), 255);
        self.pixmap.fill(self.background);
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight (non-premultiplied) RGBA of a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Copy the pixmap into an `image` buffer.
    pub fn to_rgba_image(&self) -> TrailResult<RgbaImage> {
        let mut buf = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        RgbaImage::from_raw(self.width(), self.height(), buf)
            .ok_or_else(|| TrailError::Image("Pixel buffer size mismatch".to_string()))
    }

    /// Save the current frame; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> TrailResult<()> {
        let path = path.as_ref();
        self.to_rgba_image()?.save(path)?;
        tracing::info!(
            path = %path.display(),
            width = self.width(),
            height = self.height(),
            "Saved trail frame"
        );
        Ok(())
    }
}

impl DrawSurface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(self.background);
    }

    fn set_line_style(&mut self, width: f64, color: Color, alpha: f64) {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.paint.set_color_rgba8(color.r(), color.g(), color.b(), a);
        self.stroke.width = width as f32;
        self.visible = width > 0.0 && a > 0;
    }

    fn draw_line_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        // tiny-skia strokes width 0 as a hairline; a zero-width trail end draws nothing.
        if !self.visible {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(x1 as f32, y1 as f32);
        pb.line_to(x2 as f32, y2 as f32);

        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &self.paint, &self.stroke, Transform::identity(), None);
        }
    }
}
