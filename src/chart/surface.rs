//! The drawing capability the trend renderer paints through.
//!
//! A [`Surface`] is anything that can clear itself and accept four primitives: a filled
//! rectangle, a stroked polyline, a filled circle and a line of text. Coordinates are
//! device pixels with the origin in the top-left corner and `y` growing downward.

use anyhow::Result;

/// A position on the surface, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner and extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// 8-bit RGB with a fractional alpha (`0.0` transparent, `1.0` opaque).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Alpha scaled to `0..=255`.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Stroke parameters for [`Surface::stroke_path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// A 2D pixel area the renderer can draw onto.
///
/// Implementations report their own failures (I/O, missing fonts, ...) through
/// `anyhow`; the renderer passes them to its caller unchanged.
pub trait Surface {
    /// Reset every pixel to the surface's base state.
    fn clear(&mut self) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()>;

    /// Stroke one continuous polyline through `points`, in order.
    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()>;

    /// Draw `text` with its left end on the baseline at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font_px: f64, color: Rgba) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        (**self).fill_rect(rect, color)
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()> {
        (**self).stroke_path(points, stroke)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        (**self).fill_circle(center, radius, color)
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_px: f64, color: Rgba) -> Result<()> {
        (**self).fill_text(text, origin, font_px, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped_and_scaled() {
        assert_eq!(Rgba::new(0, 0, 0, 0.0).alpha_u8(), 0);
        assert_eq!(Rgba::new(0, 0, 0, 1.0).alpha_u8(), 255);
        assert_eq!(Rgba::new(0, 0, 0, 2.5).alpha_u8(), 255);
        assert_eq!(Rgba::new(0, 0, 0, 0.5).alpha_u8(), 128);
    }
}
