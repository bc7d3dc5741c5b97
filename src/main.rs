mod cache;
mod chart;
mod client;
mod config;
mod format;
mod models;
mod poller;
mod series;
mod ui;
mod view;

use eframe::egui;
use egui::Color32;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use cache::ReadingCache;
use ui::DashboardView;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Sensor Telemetry Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Sensor Telemetry Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new()))),
    )
}

struct DashboardApp {
    api_base_url: String,
    poll_interval_secs: u64,
    cache: Arc<Mutex<ReadingCache>>,
    view: Arc<Mutex<DashboardView>>,
    in_flight: Arc<AtomicBool>,
    last_poll_time: Option<Instant>,
}

impl DashboardApp {
    fn new() -> Self {
        let config = config::load_config();
        tracing::info!(
            api_base_url = %config.api_base_url,
            poll_interval_secs = config.poll_interval_secs,
            "starting dashboard"
        );

        Self {
            api_base_url: config.api_base_url,
            poll_interval_secs: config.poll_interval_secs,
            cache: Arc::new(Mutex::new(ReadingCache::default())),
            view: Arc::new(Mutex::new(DashboardView::default())),
            in_flight: Arc::new(AtomicBool::new(false)),
            last_poll_time: None,
        }
    }

    fn trigger_refresh(&self) {
        poller::spawn_refresh(
            self.api_base_url.clone(),
            Arc::clone(&self.cache),
            Arc::clone(&self.view),
            Arc::clone(&self.in_flight),
        );
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals {
            dark_mode: true,
            window_fill: Color32::from_rgb(18, 18, 18),
            panel_fill: Color32::from_rgb(18, 18, 18),
            override_text_color: Some(Color32::from_rgb(200, 200, 200)),
            ..Default::default()
        });

        // Keep repainting while a refresh worker is running so its result
        // shows up as soon as it lands.
        if self.in_flight.load(Ordering::SeqCst) {
            ctx.request_repaint();
        }

        let mut manual_refresh = false;

        // Top bar
        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::new().fill(Color32::from_rgb(18, 18, 18)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("📈 SENSOR TELEMETRY DASHBOARD")
                            .size(16.0)
                            .color(Color32::from_rgb(45, 212, 191))
                            .monospace(),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(20.0);

                        let refresh_btn = egui::Button::new(
                            egui::RichText::new("🔄 REFRESH")
                                .size(11.0)
                                .color(Color32::WHITE)
                                .monospace(),
                        )
                        .fill(Color32::from_rgb(13, 115, 105))
                        .corner_radius(4.0);

                        if ui.add(refresh_btn).on_hover_text("Fetch now").clicked() {
                            manual_refresh = true;
                        }

                        ui.add_space(10.0);

                        let view = self.view.lock().unwrap();
                        ui::draw_status_pill(ui, view.status);
                        drop(view);

                        ui.add_space(10.0);

                        let cached = self.cache.lock().unwrap().get().0.len();
                        ui.label(
                            egui::RichText::new(format!("READINGS CACHED: {cached}"))
                                .size(11.0)
                                .color(Color32::from_rgb(160, 160, 160))
                                .monospace(),
                        );
                    });
                });
                ui.add_space(12.0);

                ui.separator();
            });

        // Main content
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(Color32::from_rgb(18, 18, 18))
                    .inner_margin(20.0),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let view = self.view.lock().unwrap();

                    ui::draw_stats_card(ui, view.stats.as_ref());
                    ui.add_space(15.0);
                    ui::draw_latest_table(ui, &view.latest);
                    ui.add_space(15.0);
                    ui::draw_history_table(ui, &view.history);
                    ui.add_space(15.0);
                    ui::draw_chart_grid(ui, &view.charts);
                });
            });

        // Manual trigger fires immediately and leaves the periodic timer's
        // phase alone.
        if manual_refresh {
            self.trigger_refresh();
        }

        // Periodic trigger; the first frame counts as the startup refresh.
        let poll_due = match self.last_poll_time {
            Some(last_poll) => last_poll.elapsed().as_secs() >= self.poll_interval_secs,
            None => true,
        };

        if poll_due && !self.in_flight.load(Ordering::SeqCst) {
            self.last_poll_time = Some(Instant::now());
            self.trigger_refresh();
        }

        // Request repaint to keep the schedule checked
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
