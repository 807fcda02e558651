//! Runtime configuration shared by the CLI and the GUI.
//!
//! Defaults can be overridden through the environment:
//!
//! | variable              | field        | example                      |
//! |-----------------------|--------------|------------------------------|
//! | `WXDASH_API_BASE`     | `api_base`   | `https://wx.example.org/api` |
//! | `WXDASH_DEMO_MODE`    | `demo_mode`  | `true` / `1`                 |
//! | `WXDASH_TIMEOUT_SECS` | `timeout`    | `10`                         |
//! | `WXDASH_FONT`         | `font_path`  | `/usr/share/fonts/DejaVuSans.ttf` |
//!
//! The CLI reads the same variables through clap, so flags win over the environment.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_API_BASE: &str = "WXDASH_API_BASE";
pub const ENV_DEMO_MODE: &str = "WXDASH_DEMO_MODE";
pub const ENV_TIMEOUT_SECS: &str = "WXDASH_TIMEOUT_SECS";
pub const ENV_FONT: &str = "WXDASH_FONT";

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the dashboard API, without a trailing slash.
    pub api_base: String,
    /// Serve fixtures instead of calling the API.
    pub demo_mode: bool,
    pub timeout: Duration,
    /// TrueType font for PNG labels; SVG output does not need one.
    pub font_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            demo_mode: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            font_path: None,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by the `WXDASH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(base) = lookup(ENV_API_BASE).filter(|s| !s.trim().is_empty()) {
            cfg.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(flag) = lookup(ENV_DEMO_MODE) {
            cfg.demo_mode = parse_flag(&flag)
                .with_context(|| format!("{ENV_DEMO_MODE}={flag:?} is not a boolean"))?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT_SECS}={secs:?} is not a number of seconds"))?;
            cfg.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(font) = lookup(ENV_FONT).filter(|s| !s.trim().is_empty()) {
            cfg.font_path = Some(PathBuf::from(font));
        }
        Ok(cfg)
    }
}

/// Accepts `true/false`, `1/0`, `yes/no`, `on/off` in any case.
pub fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected true/false, got {other:?}"),
    }
}
