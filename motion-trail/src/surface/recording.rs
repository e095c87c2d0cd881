//! In-memory command recorder.

use std::fmt;

use serde::Serialize;

use super::DrawSurface;
use crate::config::Color;

/// A single command issued to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Register,
    Clear,
    LineStyle { width: f64, color: Color, alpha: f64 },
    Segment { x1: f64, y1: f64, x2: f64, y2: f64 },
    Release,
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Register => write!(f, "register"),
            DrawCommand::Clear => write!(f, "clear"),
            DrawCommand::LineStyle {
                width,
                color,
                alpha,
            } => write!(f, "style width={:.3} color={} alpha={:.3}", width, color, alpha),
            DrawCommand::Segment { x1, y1, x2, y2 } => {
                write!(f, "line ({:.2}, {:.2}) -> ({:.2}, {:.2})", x1, y1, x2, y2)
            }
            DrawCommand::Release => write!(f, "release"),
        }
    }
}

/// Surface that records commands instead of drawing them.
///
/// `commands` holds everything issued since the most recent `clear`, which
/// is exactly what is currently visible. Lifetime counters cover all calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clear_count: usize,
    register_count: usize,
    release_count: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Style/segment pairs currently visible, in draw order.
    pub fn styled_segments(&self) -> Vec<(DrawCommand, DrawCommand)> {
        let mut style = None;
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::LineStyle { .. } => style = Some(*cmd),
                DrawCommand::Segment { .. } => {
                    if let Some(s) = style {
                        out.push((s, *cmd));
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Number of segments currently visible.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Segment { .. }))
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn register_count(&self) -> usize {
        self.register_count
    }

    pub fn release_count(&self) -> usize {
        self.release_count
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clear_count += 1;
    }

    fn set_line_style(&mut self, width: f64, color: Color, alpha: f64) {
        self.commands.push(DrawCommand::LineStyle {
            width,
            color,
            alpha,
        });
    }

    fn draw_line_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::Segment { x1, y1, x2, y2 });
    }

    fn register(&mut self) {
        self.commands.push(DrawCommand::Register);
        self.register_count += 1;
    }

    fn release(&mut self) {
        self.commands.push(DrawCommand::Release);
        self.release_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_previous_commands() {
        let mut surface = RecordingSurface::new();
        surface.set_line_style(1.0, Color::WHITE, 1.0);
        surface.draw_line_segment(0.0, 0.0, 1.0, 1.0);
        surface.clear();

        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
        assert_eq!(surface.segment_count(), 0);
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_styled_segments_pairs_latest_style() {
        let mut surface = RecordingSurface::new();
        surface.set_line_style(1.0, Color::WHITE, 0.5);
        surface.draw_line_segment(0.0, 0.0, 1.0, 0.0);
        surface.set_line_style(2.0, Color::WHITE, 1.0);
        surface.draw_line_segment(1.0, 0.0, 2.0, 0.0);

        let pairs = surface.styled_segments();
        assert_eq!(pairs.len(), 2);
        assert!(matches!(pairs[1].0, DrawCommand::LineStyle { width, .. } if width == 2.0));
    }

    #[test]
    fn test_works_through_mut_reference() {
        fn draw(mut s: impl DrawSurface) {
            s.draw_line_segment(0.0, 0.0, 1.0, 1.0);
        }

        let mut surface = RecordingSurface::new();
        draw(&mut surface);
        assert_eq!(surface.segment_count(), 1);
    }

    #[test]
    fn test_command_display_and_json() {
        let cmd = DrawCommand::LineStyle {
            width: 2.25,
            color: Color::WHITE,
            alpha: 0.5,
        };
        assert_eq!(cmd.to_string(), "style width=2.250 color=0xFFFFFF alpha=0.500");

        let json = serde_json::to_string(&DrawCommand::Clear).unwrap();
        assert_eq!(json, r#"{"op":"clear"}"#);
    }
}
