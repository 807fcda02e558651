//! Demo-mode fixtures: the same payload shapes as the live API, without any network.
//!
//! Every constructor takes the generation time explicitly, so fixtures are reproducible
//! and independent of when the process started.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use wxdash::demo;
//!
//! let at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
//! let forecast = demo::forecast(at);
//! assert_eq!(forecast.forecast.len(), 40);
//! assert_eq!(forecast.forecast[1].datetime, "2026-01-01T15:00:00.000Z");
//! ```

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::models::{
    Analytics, CitiesWeather, CityCard, CityWeather, CurrentConditions, CurrentWeather, Forecast,
    ForecastEntry, Health, HourlyTemperature, HumidityAnalysis, Location, PressureAnalysis,
    TemperatureTrend, WindAnalysis,
};

/// Forecast steps: 3-hour intervals for five days.
pub const FORECAST_STEPS: usize = 40;
/// Hourly samples in the analytics trends.
pub const HOURLY_STEPS: usize = 24;

const ICONS: [&str; 6] = ["01d", "02d", "03d", "04d", "10d", "09d"];
const DESCRIPTIONS: [&str; 6] = [
    "clear sky",
    "few clouds",
    "scattered clouds",
    "broken clouds",
    "light rain",
    "shower rain",
];

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn hours_after(at: DateTime<Utc>, hours: i64) -> String {
    iso(at + Duration::hours(hours))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn new_york() -> Location {
    Location {
        name: "New York".into(),
        country: "US".into(),
        lat: None,
        lon: None,
    }
}

pub fn current_weather(generated_at: DateTime<Utc>) -> CurrentWeather {
    CurrentWeather {
        location: new_york(),
        current: CurrentConditions {
            temperature: 21.3,
            feels_like: 20.5,
            humidity: 62.0,
            pressure: 1013.0,
            visibility: Some(10.0),
            wind_speed: 4.8,
            wind_direction: None,
            cloudiness: None,
            description: "few clouds".into(),
            icon: "02d".into(),
            timestamp: Some(iso(generated_at)),
        },
    }
}

/// Forecast temperature at step `i`: a slow sine around 18 °C with a bump every fifth step.
fn forecast_temperature(i: usize) -> f64 {
    let bump = if i % 5 == 0 { 1.5 } else { 0.0 };
    18.0 + (i as f64 / 3.0).sin() * 4.0 + bump
}

pub fn forecast(generated_at: DateTime<Utc>) -> Forecast {
    let forecast = (0..FORECAST_STEPS)
        .map(|i| {
            let t = forecast_temperature(i);
            let idx = i % ICONS.len();
            ForecastEntry {
                datetime: hours_after(generated_at, (i * 3) as i64),
                temperature: round1(t),
                feels_like: round1(t - 0.8),
                humidity: (55 + i % 12) as f64,
                pressure: (1012 + i % 7) as f64,
                wind_speed: round1(3.5 + (i % 5) as f64 * 0.6),
                wind_direction: None,
                cloudiness: None,
                description: DESCRIPTIONS[idx].into(),
                icon: ICONS[idx].into(),
                precipitation: None,
            }
        })
        .collect();
    Forecast {
        location: new_york(),
        forecast,
        updated_at: Some(iso(generated_at)),
    }
}

pub fn analytics(generated_at: DateTime<Utc>) -> Analytics {
    let hourly_data = (0..HOURLY_STEPS)
        .map(|i| {
            let bump = if i % 6 == 0 { 1.2 } else { 0.0 };
            HourlyTemperature {
                time: hours_after(generated_at, i as i64),
                temperature: round1(18.0 + (i as f64 / 3.0).sin() * 4.0 + bump),
            }
        })
        .collect();
    Analytics {
        location: Some(new_york()),
        temperature_trend: TemperatureTrend {
            current: 21.3,
            min_forecast: 14.2,
            max_forecast: 26.8,
            avg_forecast: 19.6,
            hourly_data,
        },
        humidity_analysis: HumidityAnalysis {
            current: 62.0,
            avg_forecast: 58.0,
            trend: (0..HOURLY_STEPS)
                .map(|i| (50 + (i * 3) % 30) as f64)
                .collect(),
        },
        pressure_analysis: PressureAnalysis {
            current: 1013.0,
            avg_forecast: 1011.0,
            trend: (0..HOURLY_STEPS)
                .map(|i| 1008.0 + (i % 8) as f64 * 1.2)
                .collect(),
        },
        wind_analysis: WindAnalysis {
            current_speed: 4.8,
            current_direction: None,
            avg_speed: 4.1,
            max_speed: None,
            hourly_speeds: (0..HOURLY_STEPS)
                .map(|i| round1(3.2 + (i % 7) as f64 * 0.4))
                .collect(),
        },
        updated_at: Some(iso(generated_at)),
    }
}

#[allow(clippy::too_many_arguments)]
fn city(
    name: &str,
    lat: f64,
    lon: f64,
    temperature: f64,
    humidity: f64,
    pressure: f64,
    wind_speed: f64,
    description: &str,
    icon: &str,
) -> CityWeather {
    CityWeather {
        name: name.into(),
        lat,
        lon,
        temperature,
        humidity,
        pressure,
        wind_speed,
        description: description.into(),
        icon: icon.into(),
    }
}

pub fn cities(generated_at: DateTime<Utc>) -> CitiesWeather {
    CitiesWeather {
        cities: vec![
            city("New York", 40.7128, -74.006, 21.3, 62.0, 1013.0, 4.8, "few clouds", "02d"),
            city("London", 51.5072, -0.1276, 16.8, 71.0, 1016.0, 5.4, "broken clouds", "04d"),
            city("Tokyo", 35.6762, 139.6503, 24.1, 58.0, 1009.0, 3.7, "clear sky", "01d"),
            city("Sydney", -33.8688, 151.2093, 19.4, 55.0, 1018.0, 6.2, "light rain", "10d"),
            city("Paris", 48.8566, 2.3522, 17.9, 65.0, 1014.0, 4.1, "scattered clouds", "03d"),
            city("Moscow", 55.7558, 37.6173, 9.6, 74.0, 1020.0, 5.9, "overcast clouds", "04d"),
            city("Dubai", 25.2048, 55.2708, 32.2, 41.0, 1006.0, 3.3, "clear sky", "01d"),
            city("Singapore", 1.3521, 103.8198, 29.1, 76.0, 1008.0, 2.9, "shower rain", "09d"),
        ],
        updated_at: Some(iso(generated_at)),
    }
}

pub fn health(generated_at: DateTime<Utc>) -> Health {
    Health {
        status: "ok".into(),
        timestamp: iso(generated_at),
        demo: true,
    }
}

/// The three showcase cities of the standalone dashboard, each with a week-long trend.
pub fn dashboard_cities() -> Vec<CityCard> {
    let card = |name: &str, country: &str, condition: &str, readings: [f64; 4], trend: [f64; 7]| {
        let [temp_c, humidity, wind_kph, pressure_hpa] = readings;
        CityCard {
            name: name.into(),
            country: country.into(),
            condition: condition.into(),
            temp_c,
            humidity,
            wind_kph,
            pressure_hpa,
            trend: trend.to_vec(),
        }
    };
    vec![
        card(
            "Cape Town",
            "ZA",
            "Partly cloudy",
            [22.0, 61.0, 18.0, 1016.0],
            [18.0, 19.0, 20.0, 22.0, 21.0, 23.0, 22.0],
        ),
        card(
            "Johannesburg",
            "ZA",
            "Clear",
            [27.0, 42.0, 11.0, 1012.0],
            [24.0, 25.0, 26.0, 27.0, 28.0, 27.0, 27.0],
        ),
        card(
            "London",
            "GB",
            "Rain",
            [9.0, 88.0, 24.0, 1004.0],
            [10.0, 9.0, 8.0, 9.0, 11.0, 10.0, 9.0],
        ),
    ]
}

/// Case-insensitive lookup of a showcase city by name.
pub fn find_dashboard_city(name: &str) -> Option<CityCard> {
    let needle = name.trim();
    dashboard_cities()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap()
    }

    #[test]
    fn fixtures_are_reproducible() {
        assert_eq!(forecast(at()), forecast(at()));
        assert_eq!(analytics(at()), analytics(at()));
        assert_ne!(forecast(at()), forecast(at() + Duration::hours(1)));
    }

    #[test]
    fn forecast_values_follow_the_demo_curve() {
        let f = forecast(at());
        let first = &f.forecast[0];
        assert_eq!(first.datetime, "2026-10-18T06:00:00.000Z");
        assert_eq!(first.temperature, 19.5); // 18 + sin(0)*4 + 1.5
        assert_eq!(first.feels_like, 18.7);
        assert_eq!(first.humidity, 55.0);
        assert_eq!(first.pressure, 1012.0);
        assert_eq!(first.wind_speed, 3.5);
        assert_eq!(first.icon, "01d");
        assert_eq!(f.forecast[39].datetime, "2026-10-23T03:00:00.000Z");
        assert_eq!(f.forecast[7].description, "few clouds");
    }

    #[test]
    fn analytics_trends_have_hourly_length() {
        let a = analytics(at());
        assert_eq!(a.temperature_trend.hourly_data.len(), HOURLY_STEPS);
        assert_eq!(a.humidity_analysis.trend[..4], [50.0, 53.0, 56.0, 59.0]);
        assert_eq!(a.humidity_analysis.trend[10], 50.0);
        assert!((a.pressure_analysis.trend[7] - 1016.4).abs() < 1e-9);
        assert_eq!(a.wind_analysis.hourly_speeds[6], 5.6);
    }

    #[test]
    fn showcase_city_lookup_ignores_case() {
        let c = find_dashboard_city("cape town").unwrap();
        assert_eq!(c.label(), "Cape Town, ZA");
        assert_eq!(c.trend.len(), 7);
        assert!(find_dashboard_city("Atlantis").is_none());
    }
}
