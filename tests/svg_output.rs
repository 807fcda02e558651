use std::fs;
use wxdash::chart::{self, RenderError, TrendStyle, backend::render_to_svg_string};
use wxdash::demo;

fn sample() -> Vec<f64> {
    vec![18.0, 19.0, 20.0, 22.0, 21.0, 23.0, 22.0]
}

#[test]
fn svg_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trend.svg");
    chart::render_to_file(&path, 300, 150, &sample(), &TrendStyle::default()).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"300\""));
    assert!(svg.contains("23.0°C"));
}

#[test]
fn svg_output_is_byte_identical_across_renders() {
    let style = TrendStyle::default();
    let a = render_to_svg_string(300, 150, &sample(), &style).unwrap();
    let b = render_to_svg_string(300, 150, &sample(), &style).unwrap();
    assert_eq!(a, b);
}

#[test]
fn uppercase_extension_still_selects_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("TREND.SVG");
    chart::render_to_file(&path, 300, 150, &[1.0, 2.0], &TrendStyle::default()).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("<svg"));
}

#[test]
fn every_showcase_city_renders() {
    for city in demo::dashboard_cities() {
        let svg = render_to_svg_string(300, 150, &city.trend, &TrendStyle::default()).unwrap();
        assert_eq!(svg.matches("<circle").count(), city.trend.len(), "{}", city.name);
    }
}

#[test]
fn empty_series_is_rejected_before_touching_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.png");
    let err = chart::render_to_file(&path, 300, 150, &[], &TrendStyle::default()).unwrap_err();
    assert!(matches!(err, RenderError::InvalidInput(_)));
    assert!(!path.exists());
}
