use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Latitude/longitude pair used to query the weather endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Default for Coordinates {
    /// New York City, the dashboard's default location.
    fn default() -> Self {
        Self::new(40.7128, -74.0060)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// Conditions block of `GET /weather/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    /// Kilometers.
    #[serde(default)]
    pub visibility: Option<f64>,
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    #[serde(default)]
    pub cloudiness: Option<f64>,
    pub description: String,
    pub icon: String,
    /// The live API calls this `timestamp`, the demo fixtures `updated_at`.
    #[serde(default, alias = "updated_at")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location: Location,
    pub current: CurrentConditions,
}

/// One 3-hour step of `GET /weather/forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub datetime: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    #[serde(default)]
    pub cloudiness: Option<f64>,
    pub description: String,
    pub icon: String,
    /// Rain plus snow over the step, millimeters.
    #[serde(default)]
    pub precipitation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location: Location,
    pub forecast: Vec<ForecastEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Forecast {
    /// Flat series of `metric`, one sample per forecast step.
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.forecast
            .iter()
            .map(|e| match metric {
                Metric::Temperature => e.temperature,
                Metric::Humidity => e.humidity,
                Metric::Pressure => e.pressure,
                Metric::Wind => e.wind_speed,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyTemperature {
    pub time: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureTrend {
    pub current: f64,
    pub min_forecast: f64,
    pub max_forecast: f64,
    pub avg_forecast: f64,
    pub hourly_data: Vec<HourlyTemperature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumidityAnalysis {
    pub current: f64,
    pub avg_forecast: f64,
    pub trend: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureAnalysis {
    pub current: f64,
    pub avg_forecast: f64,
    pub trend: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindAnalysis {
    pub current_speed: f64,
    #[serde(default)]
    pub current_direction: Option<f64>,
    pub avg_speed: f64,
    #[serde(default)]
    pub max_speed: Option<f64>,
    pub hourly_speeds: Vec<f64>,
}

/// Payload of `GET /weather/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub temperature_trend: TemperatureTrend,
    pub humidity_analysis: HumidityAnalysis,
    pub pressure_analysis: PressureAnalysis,
    pub wind_analysis: WindAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Analytics {
    /// Hourly series of `metric`, ready for the trend chart.
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        match metric {
            Metric::Temperature => self
                .temperature_trend
                .hourly_data
                .iter()
                .map(|h| h.temperature)
                .collect(),
            Metric::Humidity => self.humidity_analysis.trend.clone(),
            Metric::Pressure => self.pressure_analysis.trend.clone(),
            Metric::Wind => self.wind_analysis.hourly_speeds.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityWeather {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

impl CityWeather {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitiesWeather {
    pub cities: Vec<CityWeather>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub demo: bool,
}

/// A showcase city card: current readings plus a short temperature trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityCard {
    pub name: String,
    pub country: String,
    pub condition: String,
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub pressure_hpa: f64,
    pub trend: Vec<f64>,
}

impl CityCard {
    /// `"Cape Town, ZA"`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Which quantity a trend series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
    Wind,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pressure,
        Metric::Wind,
    ];

    /// Suffix for chart labels.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Pressure => " hPa",
            Metric::Wind => " m/s",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Pressure => "pressure",
            Metric::Wind => "wind",
        };
        f.write_str(s)
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Ok(Metric::Temperature),
            "humidity" => Ok(Metric::Humidity),
            "pressure" => Ok(Metric::Pressure),
            "wind" | "wind_speed" => Ok(Metric::Wind),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}
