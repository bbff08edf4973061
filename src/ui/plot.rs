use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Corner, Legend, MarkerShape, Plot, PlotPoint, Points, Polygon, Text};

use crate::data::filter::scatter_points;
use crate::state::AppState;

/// Largest arc drawn as a single polygon; wider slices are split so every
/// piece stays convex.
const MAX_WEDGE_ANGLE: f64 = FRAC_PI_2;

// ---------------------------------------------------------------------------
// Outcome pie chart
// ---------------------------------------------------------------------------

/// Render the pie chart for the current site selection.
pub fn outcome_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let pie = &state.pie;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(pie.title());
    });

    let slices = pie.slices();
    let total = pie.total() as f64;

    Plot::new("outcome_pie")
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.1)
        .include_y(1.1)
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            if total <= 0.0 {
                plot_ui.text(Text::new(PlotPoint::new(0.0, 0.0), "No launches to display"));
                return;
            }

            // Clockwise from 12 o'clock.
            let mut start = FRAC_PI_2;
            for (label, value) in &slices {
                if *value == 0 {
                    continue;
                }
                let fraction = *value as f64 / total;
                let sweep = fraction * TAU;
                let color = state.slice_colors.color_for(label);

                for wedge in wedge_polygons(start, start - sweep) {
                    plot_ui.polygon(
                        Polygon::new(wedge)
                            .name(label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", fraction * 100.0)).color(Color32::WHITE),
                ));
                start -= sweep;
            }
        });
}

/// Unit-circle wedge from angle `from` to `to` (radians), as convex pieces.
fn wedge_polygons(from: f64, to: f64) -> Vec<Vec<[f64; 2]>> {
    let sweep = (from - to).abs();
    let pieces = (sweep / MAX_WEDGE_ANGLE).ceil().max(1.0) as usize;
    let step = (to - from) / pieces as f64;

    (0..pieces)
        .map(|p| {
            let a0 = from + step * p as f64;
            let a1 = a0 + step;
            let segments = 24;
            let mut points = vec![[0.0, 0.0]];
            points.extend((0..=segments).map(|s| {
                let a = a0 + (a1 - a0) * s as f64 / segments as f64;
                [a.cos(), a.sin()]
            }));
            points
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter plot
// ---------------------------------------------------------------------------

/// Render the payload scatter for the current site and payload range,
/// one series per booster category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!(
            "Payload vs. Launch Outcome: {} ({})",
            state.selected_site.label(),
            state.payload_range
        ));
    });

    let points = scatter_points(&state.table, &state.scatter_indices);

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default().position(Corner::RightBottom))
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(state.payload_range.low)
        .include_x(state.payload_range.high)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, color) in state.booster_colors.legend_entries() {
                let series: Vec<[f64; 2]> = points
                    .iter()
                    .filter(|p| p.color_category == category)
                    .map(|p| [p.payload_mass_kg, f64::from(p.outcome_class.value())])
                    .collect();
                if series.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(series)
                        .name(category)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}
