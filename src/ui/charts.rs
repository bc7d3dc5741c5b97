use eframe::egui;
use egui::{Color32, Pos2, Sense, Shape, Stroke, Vec2};

use crate::chart::{self, ChartGeometry};
use crate::view::SensorSeries;

const CARD_MIN_WIDTH: f32 = 300.0;
const CANVAS_HEIGHT: f32 = 110.0;
const CARD_SPACING: f32 = 12.0;

pub fn draw_chart_grid(ui: &mut egui::Ui, charts: &[SensorSeries]) {
    if charts.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Waiting for readings...")
                    .size(12.0)
                    .color(Color32::from_rgb(120, 120, 120))
                    .monospace(),
            );
            ui.add_space(20.0);
        });
        return;
    }

    // Responsive grid: as many fixed-width columns as fit the panel.
    let available = ui.available_width();
    let columns = ((available + CARD_SPACING) / (CARD_MIN_WIDTH + CARD_SPACING))
        .floor()
        .max(1.0) as usize;
    let card_width = (available - CARD_SPACING * (columns - 1) as f32) / columns as f32;

    for (row_index, row) in charts.chunks(columns).enumerate() {
        if row_index > 0 {
            ui.add_space(CARD_SPACING);
        }
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CARD_SPACING;
            for (column_index, series) in row.iter().enumerate() {
                let color = chart::series_color(row_index * columns + column_index);
                draw_chart_card(ui, series, color, card_width);
            }
        });
    }
}

fn draw_chart_card(ui: &mut egui::Ui, series: &SensorSeries, color: Color32, width: f32) {
    egui::Frame::new()
        .fill(Color32::from_rgb(28, 28, 28))
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(60, 60, 60)))
        .corner_radius(4.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(width - 20.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&series.sensor_id)
                        .size(12.0)
                        .color(Color32::from_rgb(100, 200, 255))
                        .monospace(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("last: {}", series.last_value))
                            .size(11.0)
                            .color(Color32::from_rgb(160, 160, 160))
                            .monospace(),
                    );
                });
            });
            ui.add_space(6.0);

            let desired = Vec2::new(ui.available_width(), CANVAS_HEIGHT);
            let (rect, _response) = ui.allocate_exact_size(desired, Sense::hover());
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 2.0, Color32::from_rgb(18, 18, 18));

            let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
            match chart::layout_series(&values, rect.size()) {
                Some(geometry) => paint_series(&painter, &geometry, rect.min, rect.width(), color),
                None => {
                    painter.text(
                        rect.min + Vec2::new(8.0, 8.0),
                        egui::Align2::LEFT_TOP,
                        "no data",
                        egui::FontId::monospace(14.0),
                        Color32::from_rgba_unmultiplied(231, 236, 247, 76),
                    );
                }
            }
        });
}

fn paint_series(
    painter: &egui::Painter,
    geometry: &ChartGeometry,
    origin: Pos2,
    width: f32,
    color: Color32,
) {
    let offset = origin.to_vec2();
    let line: Vec<Pos2> = geometry.line.iter().map(|p| *p + offset).collect();
    let baseline = geometry.baseline + origin.y;
    let fill = chart::fill_color(color);

    // The filled area is emitted segment by segment; the egui tessellator
    // only handles convex polygons and the full outline is not convex.
    // A single point closes into a plain triangle, which is.
    if line.len() == 1 {
        let outline: Vec<Pos2> = chart::fill_outline(geometry, width)
            .into_iter()
            .map(|p| p + offset)
            .collect();
        painter.add(Shape::convex_polygon(outline, fill, Stroke::NONE));
    } else {
        for pair in line.windows(2) {
            painter.add(Shape::convex_polygon(
                vec![
                    pair[0],
                    pair[1],
                    Pos2::new(pair[1].x, baseline),
                    Pos2::new(pair[0].x, baseline),
                ],
                fill,
                Stroke::NONE,
            ));
        }
        painter.add(Shape::line(line, Stroke::new(chart::LINE_WIDTH, color)));
    }
}
