use wxdash::Metric;
use wxdash::api::parse_payload;
use wxdash::models::{Analytics, CitiesWeather, CurrentWeather, Forecast, Health};

#[test]
fn parse_current_weather() {
    let sample = r#"
    {
      "location": {"name": "New York", "country": "US", "lat": 40.7128, "lon": -74.006},
      "current": {
        "temperature": 21.3,
        "feels_like": 20.5,
        "humidity": 62,
        "pressure": 1013,
        "visibility": 10.0,
        "wind_speed": 4.8,
        "wind_direction": 220,
        "cloudiness": 20,
        "description": "few clouds",
        "icon": "02d",
        "timestamp": "2026-10-18T06:00:00"
      }
    }
    "#;
    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    let w: CurrentWeather = parse_payload(v).unwrap();
    assert_eq!(w.location.name, "New York");
    assert_eq!(w.location.lat, Some(40.7128));
    assert_eq!(w.current.humidity, 62.0);
    assert_eq!(w.current.wind_direction, Some(220.0));
    assert_eq!(w.current.timestamp.as_deref(), Some("2026-10-18T06:00:00"));
}

#[test]
fn demo_style_updated_at_is_accepted_as_timestamp() {
    let sample = r#"
    {
      "location": {"name": "New York", "country": "US"},
      "current": {
        "temperature": 21.3, "feels_like": 20.5, "humidity": 62, "pressure": 1013,
        "wind_speed": 4.8, "description": "few clouds", "icon": "02d",
        "updated_at": "2026-10-18T06:00:00.000Z"
      }
    }
    "#;
    let w: CurrentWeather = serde_json::from_str(sample).unwrap();
    assert_eq!(w.current.timestamp.as_deref(), Some("2026-10-18T06:00:00.000Z"));
    assert_eq!(w.current.visibility, None);
}

#[test]
fn parse_forecast_and_extract_series() {
    let sample = r#"
    {
      "location": {"name": "London", "country": "GB", "lat": 51.5, "lon": -0.12},
      "forecast": [
        {"datetime": "2026-10-18 06:00:00", "temperature": 11.2, "feels_like": 10.1,
         "humidity": 81, "pressure": 1004, "wind_speed": 6.1, "wind_direction": 250,
         "cloudiness": 90, "description": "light rain", "icon": "10d", "precipitation": 0.6},
        {"datetime": "2026-10-18 09:00:00", "temperature": 12.8, "feels_like": 11.9,
         "humidity": 77, "pressure": 1005, "wind_speed": 5.4, "wind_direction": 245,
         "cloudiness": 75, "description": "broken clouds", "icon": "04d", "precipitation": 0}
      ]
    }
    "#;
    let f: Forecast = serde_json::from_str(sample).unwrap();
    assert_eq!(f.forecast.len(), 2);
    assert_eq!(f.series(Metric::Temperature), vec![11.2, 12.8]);
    assert_eq!(f.series(Metric::Pressure), vec![1004.0, 1005.0]);
    assert_eq!(f.series(Metric::Wind), vec![6.1, 5.4]);
    assert_eq!(f.forecast[0].precipitation, Some(0.6));
}

#[test]
fn parse_analytics_and_extract_series() {
    let sample = r#"
    {
      "temperature_trend": {
        "current": 21.3, "min_forecast": 14.2, "max_forecast": 26.8, "avg_forecast": 19.6,
        "hourly_data": [
          {"time": "2026-10-18 06:00:00", "temperature": 19.2},
          {"time": "2026-10-18 09:00:00", "temperature": 21.0},
          {"time": "2026-10-18 12:00:00", "temperature": 22.4}
        ]
      },
      "humidity_analysis": {"current": 62, "avg_forecast": 58.5, "trend": [60, 58, 55]},
      "pressure_analysis": {"current": 1013, "avg_forecast": 1011.2, "trend": [1012, 1011, 1011]},
      "wind_analysis": {
        "current_speed": 4.8, "current_direction": 200, "avg_speed": 4.1,
        "max_speed": 7.9, "hourly_speeds": [4.1, 4.5, 5.0]
      }
    }
    "#;
    let a: Analytics = serde_json::from_str(sample).unwrap();
    assert!(a.location.is_none());
    assert_eq!(a.series(Metric::Temperature), vec![19.2, 21.0, 22.4]);
    assert_eq!(a.series(Metric::Humidity), vec![60.0, 58.0, 55.0]);
    assert_eq!(a.series(Metric::Pressure), vec![1012.0, 1011.0, 1011.0]);
    assert_eq!(a.series(Metric::Wind), vec![4.1, 4.5, 5.0]);
    assert_eq!(a.wind_analysis.max_speed, Some(7.9));
}

#[test]
fn parse_cities_and_health() {
    let cities = r#"
    {"cities": [
      {"name": "Tokyo", "lat": 35.6762, "lon": 139.6503, "temperature": 24.1,
       "humidity": 58, "pressure": 1009, "wind_speed": 3.7,
       "description": "clear sky", "icon": "01d"}
    ]}
    "#;
    let c: CitiesWeather = serde_json::from_str(cities).unwrap();
    assert_eq!(c.cities[0].name, "Tokyo");
    assert_eq!(c.cities[0].coordinates().lon, 139.6503);

    let health = r#"{"status": "healthy", "timestamp": "2026-10-18T06:00:00"}"#;
    let h: Health = serde_json::from_str(health).unwrap();
    assert_eq!(h.status, "healthy");
    assert!(!h.demo);
}

#[test]
fn error_payload_becomes_error() {
    let v = serde_json::json!({"error": "Failed to fetch weather data"});
    let e = parse_payload::<Analytics>(v).unwrap_err();
    assert!(format!("{e:#}").contains("Failed to fetch weather data"));
}
