//! Scripted motion paths shared by CLI commands.

use std::f64::consts::TAU;

use clap::ValueEnum;

/// Path the simulated object follows.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PathShape {
    /// Constant-speed orbit around the center
    Circle,
    /// Back-and-forth sweep across the width
    Line,
    /// 3:2 Lissajous figure
    Lissajous,
}

/// Time for one full loop of any path (milliseconds).
pub const PERIOD_MS: f64 = 4000.0;

/// Fraction of the half-extent the path may use, leaving a margin at the edges.
const EXTENT: f64 = 0.8;

impl PathShape {
    /// Position at time `t_ms` on a `width` x `height` canvas.
    pub fn position(self, t_ms: f64, width: f64, height: f64) -> (f64, f64) {
        let (cx, cy) = (width / 2.0, height / 2.0);
        let (rx, ry) = (cx * EXTENT, cy * EXTENT);
        let phase = TAU * t_ms / PERIOD_MS;

        match self {
            PathShape::Circle => {
                let r = rx.min(ry);
                (cx + r * phase.cos(), cy + r * phase.sin())
            }
            PathShape::Line => (cx + rx * phase.sin(), cy),
            PathShape::Lissajous => (cx + rx * (3.0 * phase).sin(), cy + ry * (2.0 * phase).sin()),
        }
    }
}
