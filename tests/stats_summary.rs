use wxdash::demo;
use wxdash::stats::summarize;

#[test]
fn summary_of_showcase_trend() {
    let city = demo::find_dashboard_city("Johannesburg").unwrap();
    let s = summarize(&city.trend).unwrap();
    assert_eq!(s.count, 7);
    assert_eq!(s.min, 24.0);
    assert_eq!(s.max, 28.0);
    // sorted: 24 25 26 27 27 27 28
    assert_eq!(s.median, 27.0);
    assert!((s.mean - 184.0 / 7.0).abs() < 1e-9);
}

#[test]
fn summary_matches_chart_label_bounds() {
    for city in demo::dashboard_cities() {
        let s = summarize(&city.trend).unwrap();
        let lo = city.trend.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = city.trend.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!((s.min, s.max), (lo, hi), "{}", city.name);
    }
}

#[test]
fn summary_skips_gaps_and_handles_single_value() {
    let s = summarize(&[f64::NAN, 1013.0]).unwrap();
    assert_eq!((s.count, s.min, s.max, s.mean, s.median), (1, 1013.0, 1013.0, 1013.0, 1013.0));
    assert!(summarize(&[f64::NAN, f64::NEG_INFINITY]).is_none());
}
