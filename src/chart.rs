use egui::{Color32, Pos2, Vec2};

/// Line colors assigned to sensors by their position in the sorted id list.
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(0x2d, 0xd4, 0xbf),
    Color32::from_rgb(0xf5, 0x9f, 0x00),
    Color32::from_rgb(0x4d, 0xab, 0xf7),
    Color32::from_rgb(0xe6, 0x49, 0x80),
    Color32::from_rgb(0x94, 0xd8, 0x2d),
];

/// Vertical margin reserved above and below the plotted line, in points.
pub const CHART_PADDING: f32 = 12.0;

pub const LINE_WIDTH: f32 = 2.0;

pub fn series_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Semi-transparent fill derived from the line color.
pub fn fill_color(line: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(line.r(), line.g(), line.b(), 0x33)
}

/// Chart geometry in surface-local coordinates, origin at the top left.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub line: Vec<Pos2>,
    pub baseline: f32,
}

/// Map a value series onto a surface of the given size.
///
/// X positions are evenly spaced by index (not by timestamp delta). The Y
/// span has a floor of 1 so an all-equal series stays a flat line on the
/// baseline instead of dividing by zero. Returns `None` for an empty
/// series; the caller draws the "no data" placeholder instead.
pub fn layout_series(values: &[f64], size: Vec2) -> Option<ChartGeometry> {
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(1.0);

    let x_step = size.x / (values.len() - 1).max(1) as f32;
    let usable = size.y - CHART_PADDING * 2.0;
    let baseline = size.y - CHART_PADDING;

    let line = values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let x = idx as f32 * x_step;
            let y = baseline - (((value - min) / span) as f32) * usable;
            Pos2::new(x, y)
        })
        .collect();

    Some(ChartGeometry { line, baseline })
}

/// Outline of the filled area: the line path, closed down to the baseline
/// and back across to the origin.
pub fn fill_outline(geometry: &ChartGeometry, width: f32) -> Vec<Pos2> {
    let mut outline = geometry.line.clone();
    outline.push(Pos2::new(width, geometry.baseline));
    outline.push(Pos2::new(0.0, geometry.baseline));
    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(200.0, 100.0);

    #[test]
    fn empty_series_produces_no_geometry() {
        assert_eq!(layout_series(&[], SIZE), None);
    }

    #[test]
    fn higher_values_render_higher_on_the_surface() {
        let geometry = layout_series(&[1.0, 5.0, 3.0], SIZE).unwrap();
        let ys: Vec<f32> = geometry.line.iter().map(|p| p.y).collect();
        // Screen Y grows downward, so a larger value gives a smaller Y.
        assert!(ys[1] < ys[0]);
        assert!(ys[1] < ys[2]);
        assert!(ys[2] < ys[0]);
    }

    #[test]
    fn extremes_touch_the_padding_margins() {
        let geometry = layout_series(&[0.0, 10.0], SIZE).unwrap();
        assert_eq!(geometry.line[0].y, SIZE.y - CHART_PADDING);
        assert_eq!(geometry.line[1].y, CHART_PADDING);
    }

    #[test]
    fn x_positions_are_evenly_spaced_by_index() {
        let geometry = layout_series(&[1.0, 2.0, 3.0, 4.0, 5.0], SIZE).unwrap();
        let xs: Vec<f32> = geometry.line.iter().map(|p| p.x).collect();
        assert_eq!(xs, [0.0, 50.0, 100.0, 150.0, 200.0]);
    }

    #[test]
    fn span_floor_keeps_a_flat_series_on_the_baseline() {
        let geometry = layout_series(&[7.0, 7.0, 7.0], SIZE).unwrap();
        for point in &geometry.line {
            assert_eq!(point.y, SIZE.y - CHART_PADDING);
        }
    }

    #[test]
    fn single_point_sits_at_the_origin_edge() {
        let geometry = layout_series(&[42.0], SIZE).unwrap();
        assert_eq!(geometry.line.len(), 1);
        assert_eq!(geometry.line[0].x, 0.0);
    }

    #[test]
    fn fill_outline_closes_down_to_the_baseline() {
        let geometry = layout_series(&[1.0, 2.0], SIZE).unwrap();
        let outline = fill_outline(&geometry, SIZE.x);
        assert_eq!(outline.len(), geometry.line.len() + 2);
        assert_eq!(outline[outline.len() - 2], Pos2::new(SIZE.x, geometry.baseline));
        assert_eq!(outline[outline.len() - 1], Pos2::new(0.0, geometry.baseline));
    }

    #[test]
    fn relayout_at_a_new_size_keeps_the_shape() {
        let values = [1.0, 3.0, 2.0];
        let small = layout_series(&values, Vec2::new(100.0, 60.0)).unwrap();
        let large = layout_series(&values, Vec2::new(400.0, 200.0)).unwrap();

        assert_eq!(small.line.len(), large.line.len());
        let height_order = |g: &ChartGeometry| {
            let mut indices: Vec<usize> = (0..g.line.len()).collect();
            indices.sort_by(|&a, &b| g.line[a].y.partial_cmp(&g.line[b].y).unwrap());
            indices
        };
        assert_eq!(height_order(&small), height_order(&large));
    }

    #[test]
    fn palette_cycles_after_five_sensors() {
        assert_eq!(series_color(0), PALETTE[0]);
        assert_eq!(series_color(4), PALETTE[4]);
        assert_eq!(series_color(5), PALETTE[0]);
        assert_eq!(series_color(12), PALETTE[2]);
    }

    #[test]
    fn fill_color_keeps_the_hue_at_low_alpha() {
        let fill = fill_color(PALETTE[0]);
        assert_eq!(fill.r(), PALETTE[0].r());
        assert_eq!(fill.a(), 0x33);
    }
}
