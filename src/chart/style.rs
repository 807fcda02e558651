//! Visual constants for the trend chart.

use super::surface::Rgba;

/// Panel color the surface is cleared to (slate-900).
pub const CANVAS: Rgba = Rgba::opaque(15, 23, 42);
/// Translucent backdrop laid over the cleared surface.
pub const BACKDROP: Rgba = Rgba::new(0, 0, 0, 0.18);
pub const GRID: Rgba = Rgba::new(255, 255, 255, 0.12);
pub const LABEL: Rgba = Rgba::new(255, 255, 255, 0.7);
/// Amber (#FECA57).
pub const LINE: Rgba = Rgba::new(254, 202, 87, 0.95);
/// Coral (#FF6B6B).
pub const MARKER: Rgba = Rgba::new(255, 107, 107, 0.95);

/// Everything the renderer needs besides the data. [`Default`] is the dashboard look.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendStyle {
    /// Margin reserved on all four sides of the plotting rectangle.
    pub pad: f64,
    /// Number of horizontal gridlines, including the top and bottom edges.
    pub grid_lines: usize,
    pub canvas: Rgba,
    pub backdrop: Rgba,
    pub grid_color: Rgba,
    pub grid_width: f64,
    pub label_color: Rgba,
    pub label_font_px: f64,
    /// Left edge of the min/max labels.
    pub label_x: f64,
    /// Decimal places shown in the min/max labels.
    pub label_precision: usize,
    /// Appended to both labels, e.g. `°C` or ` hPa`.
    pub unit_suffix: String,
    pub line_color: Rgba,
    pub line_width: f64,
    pub marker_color: Rgba,
    pub marker_radius: f64,
}

impl Default for TrendStyle {
    fn default() -> Self {
        Self {
            pad: 30.0,
            grid_lines: 5,
            canvas: CANVAS,
            backdrop: BACKDROP,
            grid_color: GRID,
            grid_width: 1.0,
            label_color: LABEL,
            label_font_px: 12.0,
            label_x: 8.0,
            label_precision: 1,
            unit_suffix: "°C".to_string(),
            line_color: LINE,
            line_width: 3.0,
            marker_color: MARKER,
            marker_radius: 4.0,
        }
    }
}

impl TrendStyle {
    /// Same look, different unit suffix.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_suffix = unit.into();
        self
    }

    /// Format a sample for the min/max labels.
    pub fn format_label(&self, value: f64) -> String {
        format!("{:.*}{}", self.label_precision, value, self.unit_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_fixed_precision_and_suffix() {
        let style = TrendStyle::default();
        assert_eq!(style.format_label(23.0), "23.0°C");
        assert_eq!(style.format_label(-4.26), "-4.3°C");

        let hpa = TrendStyle::default().with_unit(" hPa");
        assert_eq!(hpa.format_label(1013.0), "1013.0 hPa");
    }
}
