use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Launches currently shown in the scatter plot, in table order.
pub fn launch_table(ui: &mut Ui, state: &AppState) {
    let records = state.table.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Flight", "Launch Site", "Payload (kg)", "class", "Booster Version", "Category"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.scatter_indices.len(), |mut row| {
                let rec = &records[state.scatter_indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.outcome_class.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.booster_version.as_deref().unwrap_or(""));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.booster_version_category);
                });
            });
        });
}
