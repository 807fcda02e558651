//! wxdash
//!
//! A small Rust library for a weather dashboard: fetch current conditions, forecasts and
//! hourly analytics from the dashboard API (or serve demo fixtures), and draw trend
//! charts. Pairs with the `wxdash` CLI and the `wxdash-gui` desktop dashboard.
//!
//! ### Features
//! - Blocking client for the dashboard API, with retries for transient failures
//! - Reproducible demo fixtures stamped with an explicit generation time
//! - Trend charts rendered through a [`chart::Surface`] trait: SVG/PNG via plotters,
//!   a recording surface for tests, an egui painter in the GUI
//! - Quick summary statistics (min, max, mean, median)
//!
//! ### Example
//! ```no_run
//! use wxdash::{Client, Coordinates, DashboardConfig, Metric};
//! use wxdash::chart::{self, TrendStyle};
//!
//! let client = Client::from_config(&DashboardConfig::default())?;
//! let analytics = client.analytics(Coordinates::default())?;
//! let temps = analytics.series(Metric::Temperature);
//! chart::render_to_file("trend.svg", 600, 300, &temps, &TrendStyle::default())?;
//! println!("{:#?}", wxdash::stats::summarize(&temps));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod demo;
pub mod models;
pub mod source;
pub mod stats;

pub use api::Client;
pub use config::DashboardConfig;
pub use models::{Coordinates, Metric};
pub use source::{DemoSource, LiveSource, WeatherSource};
