/*!
 * Desktop dashboard for wxdash
 *
 * A cross-platform window providing:
 * - A city selector (showcase cities plus the API's world cities)
 * - Current-condition tiles: temperature, condition, humidity, wind, pressure
 * - A trend chart painted straight into the window, exportable to SVG/PNG
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::Result;
use chrono::Utc;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use wxdash::chart::{self, Point, Rect, Rgba, Stroke, Surface, TrendRenderer, TrendStyle};
use wxdash::models::{Analytics, CityCard, CityWeather};
use wxdash::source::source_from_config;
use wxdash::{DashboardConfig, Metric, WeatherSource, demo};

const CHART_HEIGHT: f32 = 220.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = DashboardConfig::from_env().unwrap_or_else(|err| {
        log::warn!("ignoring malformed environment: {err:#}");
        DashboardConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([480.0, 420.0])
            .with_title("Weather Dashboard - wxdash"),
        ..Default::default()
    };

    eframe::run_native(
        "Weather Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(config)))),
    )
}

/// Which entry of the city selector is active.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Selection {
    Showcase(usize),
    World(usize),
}

#[derive(Debug)]
enum Loaded {
    Cities(Vec<CityWeather>),
    Analytics { city: String, analytics: Analytics },
    Error(String),
}

/// Main application state
struct DashboardApp {
    config: DashboardConfig,
    source: Option<Arc<dyn WeatherSource>>,
    renderer: TrendRenderer,

    showcase: Vec<CityCard>,
    world: Vec<CityWeather>,
    selection: Selection,
    metric: Metric,
    /// Latest analytics per world city; responses may arrive in any order.
    analytics: HashMap<String, Analytics>,

    // UI state
    pending: usize,
    status_message: String,
    error_message: String,

    sender: mpsc::Sender<Loaded>,
    receiver: mpsc::Receiver<Loaded>,
}

impl DashboardApp {
    fn new(config: DashboardConfig) -> Self {
        let (sender, receiver) = mpsc::channel();
        let mut app = Self {
            source: None,
            renderer: TrendRenderer::default(),
            showcase: demo::dashboard_cities(),
            world: Vec::new(),
            selection: Selection::Showcase(0),
            metric: Metric::Temperature,
            analytics: HashMap::new(),
            pending: 0,
            status_message: String::new(),
            error_message: String::new(),
            sender,
            receiver,
            config,
        };
        match source_from_config(&app.config, Utc::now()) {
            Ok(source) => {
                app.source = Some(Arc::from(source));
                app.load_cities();
            }
            Err(err) => app.error_message = format!("Cannot reach weather data: {err:#}"),
        }
        app
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce(&dyn WeatherSource) -> Loaded + Send + 'static,
    {
        let Some(source) = self.source.clone() else {
            return;
        };
        let sender = self.sender.clone();
        self.pending += 1;
        thread::spawn(move || {
            let _ = sender.send(job(source.as_ref()));
        });
    }

    fn load_cities(&mut self) {
        self.status_message = "Loading cities...".to_string();
        self.spawn(|source| match source.cities() {
            Ok(c) => Loaded::Cities(c.cities),
            Err(err) => Loaded::Error(format!("Failed to load cities: {err:#}")),
        });
    }

    fn load_analytics(&mut self, city: &CityWeather) {
        let name = city.name.clone();
        let at = city.coordinates();
        self.status_message = format!("Fetching analytics for {name}...");
        self.spawn(move |source| match source.analytics(at) {
            Ok(analytics) => Loaded::Analytics {
                city: name,
                analytics,
            },
            Err(err) => Loaded::Error(format!("Failed to fetch analytics for {name}: {err:#}")),
        });
    }

    fn select(&mut self, selection: Selection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.error_message.clear();
        if let Selection::World(i) = selection
            && let Some(city) = self.world.get(i).cloned()
        {
            self.load_analytics(&city);
        }
    }

    fn check_results(&mut self) {
        while let Ok(result) = self.receiver.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            match result {
                Loaded::Cities(cities) => {
                    self.status_message = format!("{} cities available", cities.len());
                    self.world = cities;
                }
                Loaded::Analytics { city, analytics } => {
                    self.status_message = format!("Updated {city}");
                    self.analytics.insert(city, analytics);
                }
                Loaded::Error(error) => {
                    self.error_message = error;
                    self.status_message.clear();
                }
            }
        }
    }

    fn selection_label(&self, selection: Selection) -> String {
        match selection {
            Selection::Showcase(i) => self
                .showcase
                .get(i)
                .map(CityCard::label)
                .unwrap_or_default(),
            Selection::World(i) => self
                .world
                .get(i)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        }
    }

    /// Tiles and chart series for the current selection; `None` while data is in flight.
    fn view(&self) -> Option<(Vec<(&'static str, String)>, Vec<f64>, Metric)> {
        match self.selection {
            Selection::Showcase(i) => {
                let c = self.showcase.get(i)?;
                let tiles = vec![
                    ("Temperature", format!("{}°C", c.temp_c)),
                    ("Condition", c.condition.clone()),
                    ("Humidity", format!("{}%", c.humidity)),
                    ("Wind", format!("{} km/h", c.wind_kph)),
                    ("Pressure", format!("{} hPa", c.pressure_hpa)),
                ];
                Some((tiles, c.trend.clone(), Metric::Temperature))
            }
            Selection::World(i) => {
                let c = self.world.get(i)?;
                let tiles = vec![
                    ("Temperature", format!("{:.1}°C", c.temperature)),
                    ("Condition", c.description.clone()),
                    ("Humidity", format!("{}%", c.humidity)),
                    ("Wind", format!("{:.1} m/s", c.wind_speed)),
                    ("Pressure", format!("{} hPa", c.pressure)),
                ];
                let series = self
                    .analytics
                    .get(&c.name)
                    .map(|a| a.series(self.metric))
                    .unwrap_or_default();
                Some((tiles, series, self.metric))
            }
        }
    }

    fn export_chart(&mut self, series: &[f64], style: &TrendStyle) {
        let start_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let Some(path) = rfd::FileDialog::new()
            .set_directory(start_dir)
            .set_file_name("trend.svg")
            .add_filter("SVG", &["svg"])
            .add_filter("PNG", &["png"])
            .save_file()
        else {
            return;
        };
        if let Some(font) = self.config.font_path.as_deref()
            && let Err(err) = chart::backend::register_label_font(font)
        {
            self.error_message = format!("Failed to load font: {err:#}");
            return;
        }
        match chart::render_to_file(&path, 600, 300, series, style) {
            Ok(()) => self.status_message = format!("Wrote chart to {}", path.display()),
            Err(err) => self.error_message = format!("Failed to export chart: {err}"),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_results();

        // Keep polling the channel while work is in flight
        if self.pending > 0 {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Weather Dashboard");
                if self.source.as_ref().is_some_and(|s| s.is_demo()) {
                    ui.label(egui::RichText::new("DEMO").color(egui::Color32::GOLD));
                }
            });
            ui.add_space(8.0);

            let mut chosen = self.selection;
            ui.horizontal(|ui| {
                ui.label("City:");
                egui::ComboBox::from_label("")
                    .selected_text(self.selection_label(self.selection))
                    .show_ui(ui, |ui| {
                        for i in 0..self.showcase.len() {
                            let sel = Selection::Showcase(i);
                            ui.selectable_value(&mut chosen, sel, self.selection_label(sel));
                        }
                        if !self.world.is_empty() {
                            ui.separator();
                        }
                        for i in 0..self.world.len() {
                            let sel = Selection::World(i);
                            ui.selectable_value(&mut chosen, sel, self.selection_label(sel));
                        }
                    });
                if self.pending > 0 {
                    ui.spinner();
                }
            });
            self.select(chosen);

            if matches!(self.selection, Selection::World(_)) {
                ui.horizontal(|ui| {
                    ui.label("Trend:");
                    for m in Metric::ALL {
                        ui.radio_value(&mut self.metric, m, m.to_string());
                    }
                });
            }
            ui.add_space(8.0);

            let Some((tiles, series, metric)) = self.view() else {
                return;
            };

            ui.horizontal_wrapped(|ui| {
                for (label, value) in &tiles {
                    ui.group(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(*label).small());
                            ui.label(egui::RichText::new(value).heading());
                        });
                    });
                }
            });
            ui.add_space(8.0);

            let style = self.renderer.style().clone().with_unit(metric.unit());
            if series.is_empty() {
                ui.label("Waiting for trend data...");
            } else {
                let width = ui.available_width().max(120.0);
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(width, CHART_HEIGHT), egui::Sense::hover());
                let mut surface = PainterSurface {
                    painter: &painter,
                    origin: response.rect.min,
                    size: response.rect.size(),
                    canvas: style.canvas,
                };
                let renderer = TrendRenderer::new(style.clone());
                if let Err(err) =
                    renderer.render(&mut surface, width as u32, CHART_HEIGHT as u32, &series)
                {
                    ui.colored_label(egui::Color32::RED, format!("Cannot draw trend: {err}"));
                }

                ui.add_space(6.0);
                if ui.button("Export chart...").clicked() {
                    self.export_chart(&series, &style);
                }
            }

            ui.add_space(10.0);
            if !self.status_message.is_empty() {
                ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
            }
            if !self.error_message.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.error_message);
            }
        });
    }
}

/// Paints through an egui [`egui::Painter`], offset to the allocated chart rectangle.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    size: egui::Vec2,
    canvas: Rgba,
}

impl PainterSurface<'_> {
    fn pos(&self, p: Point) -> egui::Pos2 {
        self.origin + egui::vec2(p.x as f32, p.y as f32)
    }
}

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.alpha_u8())
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) -> Result<()> {
        let rect = egui::Rect::from_min_size(self.origin, self.size);
        self.painter.rect_filled(rect, 0.0, color32(self.canvas));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        let min = self.pos(Point::new(rect.x, rect.y));
        let r = egui::Rect::from_min_size(min, egui::vec2(rect.width as f32, rect.height as f32));
        self.painter.rect_filled(r, 0.0, color32(color));
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()> {
        let pts: Vec<egui::Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(egui::Shape::line(
            pts,
            egui::Stroke::new(stroke.width as f32, color32(stroke.color)),
        ));
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        self.painter
            .circle_filled(self.pos(center), radius as f32, color32(color));
        Ok(())
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_px: f64, color: Rgba) -> Result<()> {
        self.painter.text(
            self.pos(origin),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(font_px as f32),
            color32(color),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn demo_app() -> DashboardApp {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap();
        let mut app = DashboardApp::new(DashboardConfig {
            demo_mode: true,
            ..DashboardConfig::default()
        });
        app.world = demo::cities(at).cities;
        app
    }

    #[test]
    fn late_response_for_previous_city_keeps_current_trend() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap();
        let mut app = demo_app();
        app.selection = Selection::World(1);
        let analytics = demo::analytics(at);
        let mut stale = analytics.clone();
        stale.temperature_trend.hourly_data.truncate(3);

        let current = app.world[1].name.clone();
        let previous = app.world[0].name.clone();
        app.sender
            .send(Loaded::Analytics {
                city: current,
                analytics: analytics.clone(),
            })
            .unwrap();
        app.sender
            .send(Loaded::Analytics {
                city: previous,
                analytics: stale,
            })
            .unwrap();
        app.check_results();

        let (_, series, metric) = app.view().unwrap();
        assert_eq!(metric, Metric::Temperature);
        assert_eq!(series, analytics.series(Metric::Temperature));

        app.selection = Selection::World(0);
        let (_, series, _) = app.view().unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn showcase_selection_uses_its_own_trend() {
        let app = demo_app();
        let (tiles, series, _) = app.view().unwrap();
        assert_eq!(series, app.showcase[0].trend);
        assert_eq!(tiles[0], ("Temperature", "22°C".to_string()));
    }
}
