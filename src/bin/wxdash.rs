use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use wxdash::chart::{self, TrendStyle, backend::register_label_font};
use wxdash::config::{self, DashboardConfig};
use wxdash::models::{CurrentWeather, Forecast};
use wxdash::source::source_from_config;
use wxdash::{Coordinates, Metric, demo, stats};

#[derive(Parser, Debug)]
#[command(
    name = "wxdash",
    version,
    about = "Current weather, forecasts & trend charts from the weather dashboard API"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Serve demo fixtures instead of calling the API.
    #[arg(
        long,
        global = true,
        env = config::ENV_DEMO_MODE,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    demo: bool,
    /// Base URL of the dashboard API.
    #[arg(long, global = true, env = config::ENV_API_BASE, default_value = config::DEFAULT_API_BASE)]
    api_base: String,
    /// Request timeout in seconds.
    #[arg(long, global = true, env = config::ENV_TIMEOUT_SECS, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    /// TrueType font used for labels in PNG charts.
    #[arg(long, global = true, env = config::ENV_FONT)]
    font: Option<PathBuf>,
    /// Latitude (default: New York).
    #[arg(long, global = true, default_value_t = 40.7128, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude (default: New York).
    #[arg(long, global = true, default_value_t = -74.0060, allow_negative_numbers = true)]
    lon: f64,
    /// Print raw JSON instead of a summary.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
}

impl GlobalArgs {
    fn config(&self) -> DashboardConfig {
        DashboardConfig {
            api_base: self.api_base.trim_end_matches('/').to_string(),
            demo_mode: self.demo,
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            font_path: self.font.clone(),
        }
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is reachable.
    Health,
    /// Current conditions at --lat/--lon.
    Current,
    /// Five-day forecast in 3-hour steps.
    Forecast,
    /// Hourly analytics (temperature, humidity, pressure, wind).
    Analytics,
    /// Current conditions in major cities.
    Cities,
    /// Render an hourly trend chart (.svg or .png).
    Trend(TrendArgs),
    /// Render a showcase city's weekly trend (.svg or .png).
    City(CityArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MetricArg {
    Temperature,
    Humidity,
    Pressure,
    Wind,
}

impl From<MetricArg> for Metric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Temperature => Metric::Temperature,
            MetricArg::Humidity => Metric::Humidity,
            MetricArg::Pressure => Metric::Pressure,
            MetricArg::Wind => Metric::Wind,
        }
    }
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Output file; SVG if it ends in .svg, PNG otherwise.
    #[arg(long)]
    out: PathBuf,
    /// Width of the chart (default 300).
    #[arg(long, default_value_t = 300)]
    width: u32,
    /// Height of the chart (default 150).
    #[arg(long, default_value_t = 150)]
    height: u32,
    /// Print summary statistics of the series to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args, Debug)]
struct TrendArgs {
    /// Quantity to chart.
    #[arg(long, value_enum, default_value_t = MetricArg::Temperature)]
    metric: MetricArg,
    #[command(flatten)]
    chart: ChartArgs,
}

#[derive(Args, Debug)]
struct CityArgs {
    /// Showcase city name (Cape Town, Johannesburg, London).
    #[arg(long)]
    name: String,
    #[command(flatten)]
    chart: ChartArgs,
}

fn fmt_num(x: f64) -> String {
    if x.is_finite() {
        // Up to 2 decimals, then trim trailing zeros and trailing dot.
        let s = format!("{:.2}", x);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        "NA".to_string()
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = cli.global.config();
    let source = source_from_config(&cfg, Utc::now())?;
    let at = cli.global.coordinates();
    let json = cli.global.json;

    match cli.cmd {
        Command::Health => {
            let h = source.health()?;
            if json {
                return print_json(&h);
            }
            let mode = if h.demo { " (demo)" } else { "" };
            println!("{}{} at {}", h.status, mode, h.timestamp);
        }
        Command::Current => {
            let w = source.current(at)?;
            if json {
                return print_json(&w);
            }
            print_current(&w);
        }
        Command::Forecast => {
            let f = source.forecast(at)?;
            if json {
                return print_json(&f);
            }
            print_forecast(&f);
        }
        Command::Analytics => {
            let a = source.analytics(at)?;
            if json {
                return print_json(&a);
            }
            let t = &a.temperature_trend;
            println!(
                "temperature  now={}  min={}  max={}  avg={}",
                fmt_num(t.current),
                fmt_num(t.min_forecast),
                fmt_num(t.max_forecast),
                fmt_num(t.avg_forecast)
            );
            println!(
                "humidity     now={}  avg={}",
                fmt_num(a.humidity_analysis.current),
                fmt_num(a.humidity_analysis.avg_forecast)
            );
            println!(
                "pressure     now={}  avg={}",
                fmt_num(a.pressure_analysis.current),
                fmt_num(a.pressure_analysis.avg_forecast)
            );
            println!(
                "wind         now={}  avg={}",
                fmt_num(a.wind_analysis.current_speed),
                fmt_num(a.wind_analysis.avg_speed)
            );
        }
        Command::Cities => {
            let c = source.cities()?;
            if json {
                return print_json(&c);
            }
            for city in &c.cities {
                println!(
                    "{:<12} {:>6}°C  {:>3}%  {:>6} hPa  {:>5} m/s  {}",
                    city.name,
                    fmt_num(city.temperature),
                    fmt_num(city.humidity),
                    fmt_num(city.pressure),
                    fmt_num(city.wind_speed),
                    city.description
                );
            }
        }
        Command::Trend(args) => {
            let metric = Metric::from(args.metric);
            let series = source.analytics(at)?.series(metric);
            let style = TrendStyle::default().with_unit(metric.unit());
            write_chart(&cfg, &args.chart, &series, &style)?;
        }
        Command::City(args) => {
            let city = demo::find_dashboard_city(&args.name)
                .with_context(|| format!("unknown showcase city: {}", args.name))?;
            write_chart(&cfg, &args.chart, &city.trend, &TrendStyle::default())?;
        }
    }
    Ok(())
}

fn print_current(w: &CurrentWeather) {
    let c = &w.current;
    println!("{}, {}: {}", w.location.name, w.location.country, c.description);
    println!(
        "  {}°C (feels like {}°C)  humidity {}%  wind {} m/s  pressure {} hPa",
        fmt_num(c.temperature),
        fmt_num(c.feels_like),
        fmt_num(c.humidity),
        fmt_num(c.wind_speed),
        fmt_num(c.pressure)
    );
}

fn print_forecast(f: &Forecast) {
    println!("{}, {}", f.location.name, f.location.country);
    for e in &f.forecast {
        println!(
            "  {}  {:>6}°C  {:>3}%  {:>5} m/s  {}",
            e.datetime,
            fmt_num(e.temperature),
            fmt_num(e.humidity),
            fmt_num(e.wind_speed),
            e.description
        );
    }
}

fn write_chart(
    cfg: &DashboardConfig,
    args: &ChartArgs,
    series: &[f64],
    style: &TrendStyle,
) -> Result<()> {
    if let Some(font) = cfg.font_path.as_deref() {
        register_label_font(font)?;
    }
    chart::render_to_file(&args.out, args.width, args.height, series, style)
        .with_context(|| format!("render chart to {}", args.out.display()))?;
    eprintln!("Wrote chart to {}", args.out.display());

    if args.stats
        && let Some(s) = stats::summarize(series)
    {
        println!(
            "count={} min={} max={} mean={} median={}",
            s.count,
            fmt_num(s.min),
            fmt_num(s.max),
            fmt_num(s.mean),
            fmt_num(s.median)
        );
    }
    Ok(())
}
