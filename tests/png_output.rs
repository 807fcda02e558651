//! PNG output and label fonts. Kept in its own test binary: font registration is
//! process-wide, and these tests rely on no font being registered.

use std::fs;
use wxdash::chart::{self, RenderError, TrendStyle, backend::register_label_font};

#[test]
fn png_without_font_fails_and_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trend.png");
    let err = chart::render_to_file(&path, 300, 150, &[1.0, 2.0, 3.0], &TrendStyle::default())
        .unwrap_err();
    assert!(matches!(err, RenderError::Surface(_)), "{err:?}");
    assert!(!path.exists());
}

#[test]
fn non_font_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-a-font.ttf");
    fs::write(&path, b"definitely not a TrueType file").unwrap();
    let err = register_label_font(&path).unwrap_err();
    assert!(err.to_string().contains("not a usable TrueType font"), "{err:#}");
}

#[test]
fn missing_font_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = register_label_font(&dir.path().join("absent.ttf")).unwrap_err();
    assert!(err.to_string().contains("read font"), "{err:#}");
}
