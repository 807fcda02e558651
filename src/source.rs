//! Where the dashboard's data comes from: the live API or demo fixtures.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::api::Client;
use crate::config::DashboardConfig;
use crate::demo;
use crate::models::{Analytics, CitiesWeather, Coordinates, CurrentWeather, Forecast, Health};

/// The payloads a dashboard view can ask for.
pub trait WeatherSource: Send + Sync {
    fn current(&self, at: Coordinates) -> Result<CurrentWeather>;
    fn forecast(&self, at: Coordinates) -> Result<Forecast>;
    fn analytics(&self, at: Coordinates) -> Result<Analytics>;
    fn cities(&self) -> Result<CitiesWeather>;
    fn health(&self) -> Result<Health>;

    /// True when payloads are fixtures rather than observations.
    fn is_demo(&self) -> bool {
        false
    }
}

/// Calls the dashboard API.
#[derive(Debug, Clone)]
pub struct LiveSource {
    client: Client,
}

impl LiveSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl WeatherSource for LiveSource {
    fn current(&self, at: Coordinates) -> Result<CurrentWeather> {
        self.client.current(at)
    }

    fn forecast(&self, at: Coordinates) -> Result<Forecast> {
        self.client.forecast(at)
    }

    fn analytics(&self, at: Coordinates) -> Result<Analytics> {
        self.client.analytics(at)
    }

    fn cities(&self) -> Result<CitiesWeather> {
        self.client.cities()
    }

    fn health(&self) -> Result<Health> {
        self.client.health()
    }
}

/// Serves fixtures stamped with a fixed generation time; coordinates are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSource {
    pub generated_at: DateTime<Utc>,
}

impl DemoSource {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }
}

impl WeatherSource for DemoSource {
    fn current(&self, _at: Coordinates) -> Result<CurrentWeather> {
        Ok(demo::current_weather(self.generated_at))
    }

    fn forecast(&self, _at: Coordinates) -> Result<Forecast> {
        Ok(demo::forecast(self.generated_at))
    }

    fn analytics(&self, _at: Coordinates) -> Result<Analytics> {
        Ok(demo::analytics(self.generated_at))
    }

    fn cities(&self) -> Result<CitiesWeather> {
        Ok(demo::cities(self.generated_at))
    }

    fn health(&self) -> Result<Health> {
        Ok(demo::health(self.generated_at))
    }

    fn is_demo(&self) -> bool {
        true
    }
}

/// Pick the source `config` asks for. Demo fixtures are stamped with `now`.
pub fn source_from_config(
    config: &DashboardConfig,
    now: DateTime<Utc>,
) -> Result<Box<dyn WeatherSource>> {
    if config.demo_mode {
        log::info!("demo mode: serving fixtures generated at {now}");
        Ok(Box::new(DemoSource::new(now)))
    } else {
        log::info!("live mode: {}", config.api_base);
        Ok(Box::new(LiveSource::new(Client::from_config(config)?)))
    }
}
