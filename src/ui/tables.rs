use eframe::egui;
use egui::Color32;
use egui_extras::{Column, TableBuilder};

use crate::view::{HistoryRow, LatestRow};

const ACCENT: Color32 = Color32::from_rgb(45, 212, 191);
const CELL: Color32 = Color32::from_rgb(200, 200, 200);

fn header_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(11.0).color(ACCENT).monospace());
}

fn cell_label(ui: &mut egui::Ui, text: &str, color: Color32) {
    ui.label(egui::RichText::new(text).size(11.0).color(color).monospace());
}

fn empty_placeholder(ui: &mut egui::Ui, message: &str) {
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(message)
                .size(12.0)
                .color(Color32::from_rgb(120, 120, 120))
                .monospace(),
        );
    });
    ui.add_space(20.0);
}

fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(28, 28, 28))
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(60, 60, 60)))
        .corner_radius(4.0)
        .inner_margin(20.0)
}

pub fn draw_latest_table(ui: &mut egui::Ui, rows: &[LatestRow]) {
    card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(format!("📡 LATEST READING PER SENSOR ({})", rows.len()))
                .size(13.0)
                .color(Color32::from_rgb(240, 240, 240))
                .monospace(),
        );
        ui.add_space(10.0);

        if rows.is_empty() {
            empty_placeholder(ui, "No readings yet.");
            return;
        }

        TableBuilder::new(ui)
            .id_salt("latest_table")
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(160.0).resizable(true))
            .column(Column::initial(120.0).resizable(true))
            .column(Column::initial(100.0).resizable(true))
            .column(Column::remainder().at_least(180.0))
            .header(26.0, |mut header| {
                header.col(|ui| header_label(ui, "SENSOR"));
                header.col(|ui| header_label(ui, "TYPE"));
                header.col(|ui| header_label(ui, "VALUE"));
                header.col(|ui| header_label(ui, "TIMESTAMP"));
            })
            .body(|mut body| {
                for row in rows {
                    body.row(28.0, |mut table_row| {
                        table_row.col(|ui| {
                            cell_label(ui, &row.sensor_id, Color32::from_rgb(100, 200, 255))
                        });
                        table_row.col(|ui| cell_label(ui, &row.sensor_type, CELL));
                        table_row.col(|ui| {
                            cell_label(ui, &row.value, Color32::from_rgb(255, 200, 100))
                        });
                        table_row.col(|ui| cell_label(ui, &row.timestamp, CELL));
                    });
                }
            });
    });
}

pub fn draw_history_table(ui: &mut egui::Ui, rows: &[HistoryRow]) {
    card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(format!("🕑 RECENT READINGS ({})", rows.len()))
                .size(13.0)
                .color(Color32::from_rgb(240, 240, 240))
                .monospace(),
        );
        ui.add_space(10.0);

        if rows.is_empty() {
            empty_placeholder(ui, "No stored data.");
            return;
        }

        TableBuilder::new(ui)
            .id_salt("history_table")
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(60.0))
            .column(Column::initial(160.0).resizable(true))
            .column(Column::initial(120.0).resizable(true))
            .column(Column::initial(100.0).resizable(true))
            .column(Column::remainder().at_least(180.0))
            .header(26.0, |mut header| {
                header.col(|ui| header_label(ui, "ID"));
                header.col(|ui| header_label(ui, "SENSOR"));
                header.col(|ui| header_label(ui, "TYPE"));
                header.col(|ui| header_label(ui, "VALUE"));
                header.col(|ui| header_label(ui, "TIMESTAMP"));
            })
            .body(|mut body| {
                for row in rows {
                    body.row(28.0, |mut table_row| {
                        table_row.col(|ui| {
                            cell_label(ui, &row.id, Color32::from_rgb(120, 120, 120))
                        });
                        table_row.col(|ui| {
                            cell_label(ui, &row.sensor_id, Color32::from_rgb(100, 200, 255))
                        });
                        table_row.col(|ui| cell_label(ui, &row.sensor_type, CELL));
                        table_row.col(|ui| {
                            cell_label(ui, &row.value, Color32::from_rgb(255, 200, 100))
                        });
                        table_row.col(|ui| cell_label(ui, &row.timestamp, CELL));
                    });
                }
            });
    });
}
