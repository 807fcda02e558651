/*!
 * Tests for the desktop dashboard's non-UI logic
 *
 * These exercise the pieces the window relies on without requiring a display.
 */

use chrono::{TimeZone, Utc};
use std::sync::{Arc, mpsc};
use std::thread;
use tempfile::TempDir;
use wxdash::chart::{self, RecordingSurface, TrendRenderer, TrendStyle};
use wxdash::{Coordinates, DemoSource, Metric, WeatherSource, demo};

/// The chart panel never gets narrower than 120 px and is always 220 px tall.
#[test]
fn test_chart_fits_narrowest_panel() {
    for city in demo::dashboard_cities() {
        let mut surface = RecordingSurface::new();
        chart::render(&mut surface, 120, 220, &city.trend).unwrap();
        for p in surface.markers() {
            assert!((30.0..=90.0).contains(&p.x), "{}: {p:?}", city.name);
            assert!((30.0..=190.0).contains(&p.y), "{}: {p:?}", city.name);
        }
    }
}

/// Each metric is labelled with its own unit.
#[test]
fn test_metric_units_in_labels() {
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap();
    let analytics = demo::analytics(at);
    for metric in Metric::ALL {
        let renderer = TrendRenderer::new(TrendStyle::default().with_unit(metric.unit()));
        let mut surface = RecordingSurface::new();
        renderer
            .render(&mut surface, 640, 220, &analytics.series(metric))
            .unwrap();
        assert!(
            surface.texts().iter().all(|t| t.ends_with(metric.unit())),
            "{metric}"
        );
    }
}

/// Export writes the chart at 600x300.
#[test]
fn test_export_chart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("london_trend.svg");
    let city = demo::find_dashboard_city("London").unwrap();
    chart::render_to_file(&path, 600, 300, &city.trend, &TrendStyle::default()).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("width=\"600\""));
    assert!(svg.contains("height=\"300\""));
    assert!(svg.contains("11.0°C"));
    assert!(svg.contains("8.0°C"));
}

/// Background loads hand results back over a channel, as the window does.
#[test]
fn test_background_loading() {
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap();
    let source: Arc<dyn WeatherSource> = Arc::new(DemoSource::new(at));
    let (tx, rx) = mpsc::channel();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let source = Arc::clone(&source);
            let tx = tx.clone();
            thread::spawn(move || {
                let a = source.analytics(Coordinates::default()).unwrap();
                tx.send((i, a.series(Metric::Temperature))).unwrap();
            })
        })
        .collect();
    drop(tx);
    for h in handles {
        h.join().unwrap();
    }

    let results: Vec<_> = rx.iter().collect();
    assert_eq!(results.len(), 4);
    assert!(results.windows(2).all(|w| w[0].1 == w[1].1));
}
