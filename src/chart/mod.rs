//! Trend chart: render a numeric series as a line-and-point chart onto a [`Surface`].
//!
//! - Min/max normalization into an inset plotting rectangle
//! - Evenly spaced horizontal gridlines
//! - Max/min labels on the left edge
//! - One continuous line plus a marker per sample
//!
//! Rendering is a pure function of `(width, height, series, style)`: nothing is cached
//! between calls, and the same input always produces the same drawing commands.
//!
//! ### Example
//! ```
//! use wxdash::chart::{self, RecordingSurface};
//!
//! let mut surface = RecordingSurface::new();
//! chart::render(&mut surface, 300, 150, &[18.0, 19.0, 20.0, 22.0, 21.0, 23.0, 22.0])?;
//! assert_eq!(surface.markers().len(), 7);
//! # Ok::<(), wxdash::chart::RenderError>(())
//! ```

pub mod backend;
pub mod recording;
pub mod style;
pub mod surface;

pub use backend::{PlottersSurface, render_to_file};
pub use recording::{DrawCommand, RecordingSurface};
pub use style::TrendStyle;
pub use surface::{Point, Rect, Rgba, Stroke, Surface};

use thiserror::Error;

/// Failure of a render call.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The series or the dimensions cannot be drawn; nothing was written to the surface.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The surface itself failed (I/O, missing font, ...).
    #[error(transparent)]
    Surface(#[from] anyhow::Error),
}

/// Renders trend charts with a fixed [`TrendStyle`].
#[derive(Debug, Clone, Default)]
pub struct TrendRenderer {
    style: TrendStyle,
}

impl TrendRenderer {
    pub fn new(style: TrendStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TrendStyle {
        &self.style
    }

    /// Clear `surface` and draw `series` across a `width` x `height` pixel area.
    ///
    /// Input is validated before the first drawing call, so an `InvalidInput` error
    /// leaves the surface exactly as it was.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        width: u32,
        height: u32,
        series: &[f64],
    ) -> Result<(), RenderError> {
        let style = &self.style;
        let area = PlotArea::new(width, height, style.pad)?;
        let (min, max) = bounds(series)?;
        let (w, h) = (f64::from(width), f64::from(height));

        surface.clear()?;
        surface.fill_rect(Rect::new(0.0, 0.0, w, h), style.backdrop)?;

        let grid = Stroke {
            color: style.grid_color,
            width: style.grid_width,
        };
        let steps = style.grid_lines.saturating_sub(1).max(1) as f64;
        for i in 0..style.grid_lines {
            let y = area.top + area.inner_h * i as f64 / steps;
            surface.stroke_path(
                &[Point::new(area.left, y), Point::new(area.left + area.inner_w, y)],
                grid,
            )?;
        }

        surface.fill_text(
            &style.format_label(max),
            Point::new(style.label_x, area.top + style.label_font_px),
            style.label_font_px,
            style.label_color,
        )?;
        surface.fill_text(
            &style.format_label(min),
            Point::new(style.label_x, area.top + area.inner_h),
            style.label_font_px,
            style.label_color,
        )?;

        let points = area.map(series, min, max);
        surface.stroke_path(
            &points,
            Stroke {
                color: style.line_color,
                width: style.line_width,
            },
        )?;
        for p in &points {
            surface.fill_circle(*p, style.marker_radius, style.marker_color)?;
        }
        Ok(())
    }
}

/// Render with the default dashboard style.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    width: u32,
    height: u32,
    series: &[f64],
) -> Result<(), RenderError> {
    TrendRenderer::default().render(surface, width, height, series)
}

/// Map every sample to its pixel position inside a `width` x `height` area inset by `pad`.
///
/// This is the exact mapping [`TrendRenderer::render`] uses for the line and markers.
pub fn plot_points(
    width: u32,
    height: u32,
    series: &[f64],
    pad: f64,
) -> Result<Vec<Point>, RenderError> {
    let area = PlotArea::new(width, height, pad)?;
    let (min, max) = bounds(series)?;
    Ok(area.map(series, min, max))
}

/// The inset plotting rectangle.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    inner_w: f64,
    inner_h: f64,
}

impl PlotArea {
    fn new(width: u32, height: u32, pad: f64) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidInput(format!(
                "surface dimensions must be positive, got {width}x{height}"
            )));
        }
        if !pad.is_finite() || pad < 0.0 {
            return Err(RenderError::InvalidInput(format!("invalid padding {pad}")));
        }
        let inner_w = f64::from(width) - 2.0 * pad;
        let inner_h = f64::from(height) - 2.0 * pad;
        if inner_w <= 0.0 || inner_h <= 0.0 {
            return Err(RenderError::InvalidInput(format!(
                "{width}x{height} leaves no room to plot inside a {pad}px margin"
            )));
        }
        Ok(Self {
            left: pad,
            top: pad,
            inner_w,
            inner_h,
        })
    }

    fn map(&self, series: &[f64], min: f64, max: f64) -> Vec<Point> {
        let range = (max - min).max(1.0);
        let last = series.len().saturating_sub(1);
        series
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                let x = if last == 0 {
                    self.left
                } else {
                    self.left + self.inner_w * idx as f64 / last as f64
                };
                let y = self.top + self.inner_h - ((v - min) / range) * self.inner_h;
                Point::new(x, y)
            })
            .collect()
    }
}

/// `(min, max)` of a non-empty series of finite samples whose span is finite too.
fn bounds(series: &[f64]) -> Result<(f64, f64), RenderError> {
    if series.is_empty() {
        return Err(RenderError::InvalidInput("series is empty".into()));
    }
    if let Some(idx) = series.iter().position(|v| !v.is_finite()) {
        return Err(RenderError::InvalidInput(format!(
            "sample {idx} is not a finite number"
        )));
    }
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max - min).is_finite() {
        return Err(RenderError::InvalidInput(format!(
            "span from {min} to {max} overflows"
        )));
    }
    Ok((min, max))
}
