pub mod charts;
pub mod stats;
pub mod tables;

pub use charts::draw_chart_grid;
pub use stats::draw_stats_card;
pub use tables::{draw_history_table, draw_latest_table};

use egui::Color32;

use crate::models::ApiStatus;
use crate::view::{HistoryRow, LatestRow, PresentationSink, SensorSeries, StatsPanel};

/// Frame-loop side of the presentation sink: holds whatever the refresh
/// pipeline pushed last and is painted every frame. A failed poll only
/// touches `status`, so the other regions keep showing stale data.
#[derive(Default)]
pub struct DashboardView {
    pub status: Option<ApiStatus>,
    pub stats: Option<StatsPanel>,
    pub latest: Vec<LatestRow>,
    pub history: Vec<HistoryRow>,
    pub charts: Vec<SensorSeries>,
}

impl PresentationSink for DashboardView {
    fn set_status(&mut self, status: ApiStatus) {
        self.status = Some(status);
    }

    fn show_stats(&mut self, stats: StatsPanel) {
        self.stats = Some(stats);
    }

    fn show_latest(&mut self, rows: Vec<LatestRow>) {
        self.latest = rows;
    }

    fn show_history(&mut self, rows: Vec<HistoryRow>) {
        self.history = rows;
    }

    fn show_charts(&mut self, charts: Vec<SensorSeries>) {
        self.charts = charts;
    }
}

pub fn draw_status_pill(ui: &mut egui::Ui, status: Option<ApiStatus>) {
    let (text, background, foreground) = match status {
        Some(ApiStatus::Active) => (
            "API ACTIVE",
            Color32::from_rgba_unmultiplied(34, 197, 94, 50),
            Color32::from_rgb(209, 250, 229),
        ),
        Some(ApiStatus::Offline) => (
            "API OFFLINE",
            Color32::from_rgba_unmultiplied(220, 38, 38, 64),
            Color32::from_rgb(254, 205, 211),
        ),
        None => (
            "CONNECTING…",
            Color32::from_rgb(40, 40, 40),
            Color32::from_rgb(160, 160, 160),
        ),
    };

    egui::Frame::new()
        .fill(background)
        .corner_radius(10.0)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(11.0)
                    .color(foreground)
                    .monospace(),
            );
        });
}
