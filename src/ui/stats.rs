use eframe::egui;
use egui::Color32;

use crate::view::StatsPanel;

fn stat_block(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(value)
                .size(32.0)
                .color(Color32::WHITE)
                .strong()
                .monospace(),
        );
        ui.label(
            egui::RichText::new(label)
                .size(10.0)
                .color(Color32::from_rgb(150, 220, 210))
                .monospace(),
        );
    });
}

pub fn draw_stats_card(ui: &mut egui::Ui, stats: Option<&StatsPanel>) {
    let (total_readings, total_sensors, last_update) = match stats {
        Some(panel) => (
            panel.total_readings.as_str(),
            panel.total_sensors.as_str(),
            panel.last_update.as_str(),
        ),
        None => ("0", "0", "–"),
    };

    egui::Frame::new()
        .fill(Color32::from_rgb(13, 115, 105))
        .corner_radius(4.0)
        .inner_margin(15.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("⚡ TELEMETRY OVERVIEW")
                        .size(13.0)
                        .color(Color32::WHITE)
                        .strong()
                        .monospace(),
                );

                ui.add_space(15.0);

                ui.columns(3, |columns| {
                    stat_block(&mut columns[0], total_readings, "READINGS");
                    stat_block(&mut columns[1], total_sensors, "SENSORS");
                    stat_block(&mut columns[2], last_update, "LAST UPDATE");
                });

                if let Some(panel) = stats {
                    if !panel.by_type.is_empty() {
                        ui.add_space(12.0);
                        let breakdown = panel
                            .by_type
                            .iter()
                            .map(|(sensor_type, count)| format!("{sensor_type}: {count}"))
                            .collect::<Vec<_>>()
                            .join("  •  ");
                        ui.label(
                            egui::RichText::new(breakdown)
                                .size(11.0)
                                .color(Color32::from_rgb(150, 220, 210))
                                .monospace(),
                        );
                    }
                }
            });
        });
}
