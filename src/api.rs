//! Synchronous client for the **weather dashboard API**.
//!
//! The dashboard backend wraps a third-party weather provider and exposes five JSON
//! endpoints under one base URL (default `http://localhost:5000/api`):
//!
//! | endpoint                          | payload                          |
//! |-----------------------------------|----------------------------------|
//! | `GET /health`                     | [`Health`]                       |
//! | `GET /weather/current?lat&lon`    | [`CurrentWeather`]               |
//! | `GET /weather/forecast?lat&lon`   | [`Forecast`] (3-hour steps)      |
//! | `GET /weather/analytics?lat&lon`  | [`Analytics`] (hourly trends)    |
//! | `GET /weather/cities`             | [`CitiesWeather`]                |
//!
//! ### Notes
//! - Failed upstream calls come back as `{"error": "..."}`, usually with HTTP 500;
//!   either way the message is surfaced as an error.
//! - 5xx responses and transport errors are tried three times with a short backoff in between.
//!
//! Typical usage:
//! ```no_run
//! # use wxdash::{Client, Coordinates, DashboardConfig, Metric};
//! let client = Client::from_config(&DashboardConfig::default())?;
//! let analytics = client.analytics(Coordinates::default())?;
//! let temps = analytics.series(Metric::Temperature);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::DashboardConfig;
use crate::models::{Analytics, CitiesWeather, Coordinates, CurrentWeather, Forecast, Health};
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Pauses between attempts; one more attempt than entries.
const RETRY_BACKOFF_MS: [u64; 2] = [100, 300];

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    /// Build a client for `base_url` with a total request timeout of `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("wxdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        Self::new(config.api_base.clone(), config.timeout)
    }

    pub fn health(&self) -> Result<Health> {
        self.get_json("/health", None)
    }

    pub fn current(&self, at: Coordinates) -> Result<CurrentWeather> {
        self.get_json("/weather/current", Some(at))
    }

    pub fn forecast(&self, at: Coordinates) -> Result<Forecast> {
        self.get_json("/weather/forecast", Some(at))
    }

    pub fn analytics(&self, at: Coordinates) -> Result<Analytics> {
        self.get_json("/weather/analytics", Some(at))
    }

    pub fn cities(&self) -> Result<CitiesWeather> {
        self.get_json("/weather/cities", None)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, at: Option<Coordinates>) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let query: Vec<(&str, f64)> = at
            .map(|c| vec![("lat", c.lat), ("lon", c.lon)])
            .unwrap_or_default();

        // Small retry for transient failures (5xx / network errors)
        let mut last_err: Option<anyhow::Error> = None;
        for attempt in 0..=RETRY_BACKOFF_MS.len() {
            if attempt > 0 {
                let backoff_ms = RETRY_BACKOFF_MS[attempt - 1];
                log::warn!("GET {url}: retrying in {backoff_ms}ms");
                std::thread::sleep(Duration::from_millis(backoff_ms));
            }
            log::debug!("GET {url} {query:?}");
            match self.http.get(&url).query(&query).send() {
                Ok(r) if r.status().is_success() => {
                    let v: Value = r.json().with_context(|| format!("GET {url}: decode json"))?;
                    return parse_payload(v).with_context(|| format!("GET {url}"));
                }
                Ok(r) if r.status().is_server_error() => {
                    let status = r.status();
                    let detail = r
                        .json::<Value>()
                        .ok()
                        .and_then(|v| v.get("error").map(|e| e.to_string()));
                    log::warn!("GET {url} returned HTTP {status}");
                    last_err = Some(match detail {
                        Some(msg) => anyhow::anyhow!("HTTP {status}: {msg}"),
                        None => anyhow::anyhow!("HTTP {status}"),
                    });
                }
                Ok(r) => bail!("GET {url} failed with HTTP {}", r.status()),
                Err(e) => {
                    log::warn!("GET {url} failed ({e})");
                    last_err = Some(e.into());
                }
            }
        }
        match last_err {
            Some(e) => Err(e.context(format!("GET {url}: giving up after retries"))),
            None => bail!("GET {url}: giving up after retries"),
        }
    }
}

/// Decode an API body, surfacing `{"error": ...}` payloads as errors.
pub fn parse_payload<T: DeserializeOwned>(v: Value) -> Result<T> {
    if let Some(err) = v.get("error") {
        bail!("weather api error: {}", err);
    }
    serde_json::from_value(v).context("parse payload")
}
