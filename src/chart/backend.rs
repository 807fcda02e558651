//! Plotters-backed [`Surface`]: render trend charts to **SVG** or **PNG**.
//!
//! SVG output writes text as `<text>` elements and needs no font data. PNG output
//! rasterizes glyphs through `ab_glyph`, which does not discover OS fonts: call
//! [`register_label_font`] with a TrueType file first, otherwise drawing the labels
//! fails with a font error.

use anyhow::{Context, Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::OnceLock;

use super::style::TrendStyle;
use super::surface::{Point, Rect, Rgba, Stroke, Surface};
use super::{RenderError, TrendRenderer, plot_points};

/// Font family the labels are drawn with.
pub const FONT_FAMILY: &str = "sans-serif";

static FONT_REGISTERED: OnceLock<()> = OnceLock::new();

/// Register the TrueType font used for bitmap labels.
///
/// Only the first successful call has an effect; later calls are no-ops.
pub fn register_label_font(path: &Path) -> Result<()> {
    if FONT_REGISTERED.get().is_some() {
        return Ok(());
    }
    let bytes = std::fs::read(path).with_context(|| format!("read font {}", path.display()))?;
    // ab_glyph keeps a reference for the lifetime of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("not a usable TrueType font: {}", path.display()))?;
    let _ = FONT_REGISTERED.set(());
    Ok(())
}

/// Adapts a plotters drawing area to the [`Surface`] capability.
///
/// Coordinates are rounded to whole pixels here; the renderer itself works in `f64`.
pub struct PlottersSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    canvas: Rgba,
}

impl<DB: DrawingBackend> std::fmt::Debug for PlottersSurface<DB> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlottersSurface")
            .field("size", &self.area.dim_in_pixel())
            .field("canvas", &self.canvas)
            .finish()
    }
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    /// `canvas` is the color `clear` paints the whole area with.
    pub fn new(area: DrawingArea<DB, Shift>, canvas: Rgba) -> Self {
        Self { area, canvas }
    }

    /// Flush pending output to the backend (file or string).
    pub fn present(&self) -> Result<()> {
        self.area.present().map_err(|e| anyhow!("{:?}", e))
    }
}

fn color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

fn px(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

impl<DB: DrawingBackend> Surface for PlottersSurface<DB> {
    fn clear(&mut self) -> Result<()> {
        self.area
            .fill(&color(self.canvas))
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn fill_rect(&mut self, rect: Rect, c: Rgba) -> Result<()> {
        let tl = Point::new(rect.x, rect.y);
        let br = Point::new(rect.x + rect.width, rect.y + rect.height);
        self.area
            .draw(&Rectangle::new([px(tl), px(br)], color(c).filled()))
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()> {
        let coords: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
        let width = stroke.width.round().max(1.0) as u32;
        self.area
            .draw(&PathElement::new(coords, color(stroke.color).stroke_width(width)))
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn fill_circle(&mut self, center: Point, radius: f64, c: Rgba) -> Result<()> {
        self.area
            .draw(&Circle::new(px(center), radius, color(c).filled()))
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_px: f64, c: Rgba) -> Result<()> {
        let fill = color(c);
        let style = TextStyle::from((FONT_FAMILY, font_px).into_font())
            .color(&fill)
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        self.area
            .draw(&Text::new(text.to_string(), px(origin), style))
            .map_err(|e| anyhow!("{:?}", e))
    }
}

/// Render `series` into a file: SVG when the extension is `.svg`, PNG otherwise.
///
/// Input is validated before the file is created, and a render that fails part way
/// removes what was written, so an error never leaves a chart file behind.
pub fn render_to_file<P: AsRef<Path>>(
    out_path: P,
    width: u32,
    height: u32,
    series: &[f64],
    style: &TrendStyle,
) -> Result<(), RenderError> {
    plot_points(width, height, series, style.pad)?;
    let out_path = out_path.as_ref();
    let renderer = TrendRenderer::new(style.clone());

    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    // Both backends write the file when dropped, so the surface goes out of scope
    // before a failed render's leftovers are removed.
    let drawn = if is_svg {
        let area = SVGBackend::new(out_path, (width, height)).into_drawing_area();
        draw_and_present(&renderer, PlottersSurface::new(area, style.canvas), width, height, series)
    } else {
        let area = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        draw_and_present(&renderer, PlottersSurface::new(area, style.canvas), width, height, series)
    };
    if let Err(err) = drawn {
        if out_path.exists() {
            log::debug!("removing partial chart {}", out_path.display());
            let _ = std::fs::remove_file(out_path);
        }
        return Err(err);
    }
    log::debug!(
        "rendered {} samples to {} ({}x{})",
        series.len(),
        out_path.display(),
        width,
        height
    );
    Ok(())
}

fn draw_and_present<DB: DrawingBackend>(
    renderer: &TrendRenderer,
    mut surface: PlottersSurface<DB>,
    width: u32,
    height: u32,
    series: &[f64],
) -> Result<(), RenderError> {
    renderer.render(&mut surface, width, height, series)?;
    surface.present()?;
    Ok(())
}

/// Render `series` to an SVG document held in memory.
pub fn render_to_svg_string(
    width: u32,
    height: u32,
    series: &[f64],
    style: &TrendStyle,
) -> Result<String, RenderError> {
    let renderer = TrendRenderer::new(style.clone());
    let mut out = String::new();
    {
        let area = SVGBackend::with_string(&mut out, (width, height)).into_drawing_area();
        let mut surface = PlottersSurface::new(area, style.canvas);
        renderer.render(&mut surface, width, height, series)?;
        surface.present()?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_contains_labels_and_markers() {
        let svg = render_to_svg_string(
            300,
            150,
            &[18.0, 19.0, 20.0, 22.0, 21.0, 23.0, 22.0],
            &TrendStyle::default(),
        )
        .unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("23.0°C"));
        assert!(svg.contains("18.0°C"));
        assert_eq!(svg.matches("<circle").count(), 7);
    }

    #[test]
    fn invalid_input_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let err = render_to_file(&path, 300, 150, &[], &TrendStyle::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn pixel_rounding_is_to_nearest() {
        assert_eq!(px(Point::new(29.5, 30.49)), (30, 30));
        assert_eq!(px(Point::new(-0.6, 0.4)), (-1, 0));
    }
}
