//! A [`Surface`] that records drawing commands instead of rasterizing them.

use anyhow::Result;

use super::surface::{Point, Rect, Rgba, Stroke, Surface};

/// One primitive issued to a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokePath {
        points: Vec<Point>,
        stroke: Stroke,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    FillText {
        text: String,
        origin: Point,
        font_px: f64,
        color: Rgba,
    },
}

/// Keeps the commands of the most recent render.
///
/// `clear` drops everything recorded so far, mirroring how clearing a pixel surface
/// erases the previous frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Centers of all filled circles, in drawing order.
    pub fn markers(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// All stroked paths, in drawing order.
    pub fn paths(&self) -> Vec<&[Point]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokePath { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// All text drawn, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()> {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_px: f64, color: Rgba) -> Result<()> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            font_px,
            color,
        });
        Ok(())
    }
}
