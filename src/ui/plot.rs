use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon, Text};

use crate::color::ColorMap;
use crate::data::shape::{PieStyle, ProportionSpec, ScatterSpec};

/// Segments per full turn when approximating arcs.
const ARC_SEGMENTS: usize = 180;
const MIN_MARKER_RADIUS: f32 = 3.0;
const MAX_MARKER_RADIUS: f32 = 14.0;

// ---------------------------------------------------------------------------
// Proportion chart (pie / donut)
// ---------------------------------------------------------------------------

/// Render the proportion chart pane.
pub fn proportion_chart(ui: &mut Ui, spec: &ProportionSpec, colors: &ColorMap, height: f32) {
    ui.heading(&spec.title);

    let total = spec.total();
    if total == 0 {
        empty_hint(ui, height);
        return;
    }

    let inner = match spec.style {
        PieStyle::Pie => 0.0,
        PieStyle::Donut { hole } => hole,
    };

    Plot::new("proportion_chart")
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Start at twelve o'clock and go clockwise.
            let mut start = 0.0;
            for slice in &spec.slices {
                let sweep = slice.value as f64 / total as f64 * TAU;
                let color = colors.color_for(&slice.label);

                for segment in wedge_segments(start, sweep, inner) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(segment))
                            .name(&slice.label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                }

                if slice.value > 0 {
                    let mid = start + sweep / 2.0;
                    let r = (1.0 + inner) / 2.0;
                    let pct = slice.value as f64 / total as f64 * 100.0;
                    plot_ui.text(
                        Text::new(
                            polar(r.max(0.6), mid).into(),
                            RichText::new(format!("{pct:.1}%")).color(Color32::WHITE),
                        )
                        .name(&slice.label),
                    );
                }

                start += sweep;
            }
        });
}

/// Convex pieces of a wedge (`inner == 0`) or ring sector (`inner > 0`) of
/// unit outer radius. egui only fills convex polygons, so large slices are
/// cut into narrow triangles / quads.
fn wedge_segments(start: f64, sweep: f64, inner: f64) -> Vec<Vec<[f64; 2]>> {
    let steps = ((sweep / TAU) * ARC_SEGMENTS as f64).ceil().max(1.0) as usize;
    let step = sweep / steps as f64;
    (0..steps)
        .map(|i| {
            let a0 = start + step * i as f64;
            let a1 = a0 + step;
            if inner > 0.0 {
                vec![polar(1.0, a0), polar(1.0, a1), polar(inner, a1), polar(inner, a0)]
            } else {
                vec![[0.0, 0.0], polar(1.0, a0), polar(1.0, a1)]
            }
        })
        .collect()
}

/// Angle measured clockwise from the positive y axis.
fn polar(r: f64, angle: f64) -> [f64; 2] {
    [r * angle.sin(), r * angle.cos()]
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter pane.
pub fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, colors: &ColorMap, height: f32) {
    ui.heading(&spec.title);

    if spec.points.is_empty() {
        empty_hint(ui, height);
        return;
    }

    let max_size = spec.points.iter().map(|p| p.size).fold(0.0, f64::max);

    Plot::new("scatter_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.5)
        .include_y(1.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Iterate categories so legend entries keep first-occurrence order.
            for category in &spec.categories {
                let color = colors.color_for(category);
                for point in spec.points.iter().filter(|p| p.category == *category) {
                    plot_ui.points(
                        Points::new(vec![[point.payload_mass_kg, f64::from(point.class)]])
                            .name(category)
                            .color(color)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(marker_radius(point.size, max_size)),
                    );
                }
            }
        });
}

/// Area-proportional marker radius.
fn marker_radius(size: f64, max_size: f64) -> f32 {
    if max_size <= 0.0 || size <= 0.0 {
        return MIN_MARKER_RADIUS;
    }
    let t = (size / max_size).sqrt() as f32;
    MIN_MARKER_RADIUS + t * (MAX_MARKER_RADIUS - MIN_MARKER_RADIUS)
}

fn empty_hint(ui: &mut Ui, height: f32) {
    ui.allocate_ui(eframe::egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_circle_is_cut_into_convex_pieces() {
        let pieces = wedge_segments(0.0, TAU, 0.0);
        assert_eq!(pieces.len(), ARC_SEGMENTS);
        assert!(pieces.iter().all(|p| p.len() == 3));

        let ring = wedge_segments(0.0, TAU / 4.0, 0.2);
        assert_eq!(ring.len(), ARC_SEGMENTS / 4);
        assert!(ring.iter().all(|p| p.len() == 4));
    }

    #[test]
    fn polar_starts_at_twelve_o_clock() {
        let [x, y] = polar(1.0, 0.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn marker_radius_scales_with_payload() {
        assert_eq!(marker_radius(0.0, 9600.0), MIN_MARKER_RADIUS);
        assert_eq!(marker_radius(9600.0, 9600.0), MAX_MARKER_RADIUS);
        assert!(marker_radius(2400.0, 9600.0) < marker_radius(4800.0, 9600.0));
    }
}
