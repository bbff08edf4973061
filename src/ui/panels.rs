use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Ui};

use crate::config::SliderConfig;
use crate::data::model::PayloadRange;
use crate::state::{AppState, DashboardEvent};

// ---------------------------------------------------------------------------
// Left side panel – site dropdown and payload range
// ---------------------------------------------------------------------------

/// Render the control panel. Changes are reported through `events`.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, events: &mut Vec<DashboardEvent>) {
    ui.heading("Controls");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch site");
    let current = state.selected_site.label().to_string();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text("Search sites…")
                    .desired_width(f32::INFINITY),
            );
            ui.separator();
            for option in state.visible_site_options() {
                let is_selected = option == state.selected_site;
                if ui.selectable_label(is_selected, option.label()).clicked() {
                    events.push(DashboardEvent::SiteSelected(option.clone()));
                }
            }
        });
    ui.add_space(12.0);

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    if let Some(range) = payload_range_control(ui, &state.slider, state.payload_range) {
        events.push(DashboardEvent::PayloadRangeChanged(range));
    }
    ui.add_space(12.0);
    ui.separator();

    // ---- Dataset summary ----
    let table = &state.table;
    ui.label(format!("{} launches at {} sites", table.len(), table.sites().len()));
    ui.label(format!(
        "Payload in dataset: {:.0} – {:.0} kg",
        table.min_payload(),
        table.max_payload()
    ));
    ui.label(format!("{} launches in range", state.scatter_indices.len()));
}

/// Two stepped sliders forming one range. Returns the new range if either
/// handle moved; the other handle is pushed along so that `low <= high`.
fn payload_range_control(ui: &mut Ui, slider: &SliderConfig, current: PayloadRange) -> Option<PayloadRange> {
    let mut range = current;
    let bounds = slider.min..=slider.max;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut range.low, bounds.clone())
                .step_by(slider.step)
                .text("from"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut range.high, bounds)
                .step_by(slider.step)
                .text("to"),
        )
        .changed();
    slider_marks(ui, slider);

    if low_changed && range.low > range.high {
        range.high = range.low;
    } else if high_changed && range.high < range.low {
        range.low = range.high;
    }

    (range != current).then_some(range)
}

/// Tick labels under the sliders.
fn slider_marks(ui: &mut Ui, slider: &SliderConfig) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 14.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let span = slider.max - slider.min;
    if span <= 0.0 {
        return;
    }
    let color = ui.visuals().weak_text_color();
    for &mark in &slider.marks {
        let t = ((mark - slider.min) / span).clamp(0.0, 1.0) as f32;
        let anchor = match t {
            t if t <= 0.0 => Align2::LEFT_CENTER,
            t if t >= 1.0 => Align2::RIGHT_CENTER,
            _ => Align2::CENTER_CENTER,
        };
        painter.text(
            egui::pos2(rect.left() + t * rect.width(), rect.center().y),
            anchor,
            format!("{mark:.0}"),
            FontId::proportional(10.0),
            color,
        );
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, events: &mut Vec<DashboardEvent>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                if let Some(event) = open_file_dialog(state) {
                    events.push(event);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in scatter",
            state.table.len(),
            state.scatter_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for a dataset file and load it. A failed load keeps the current table
/// and leaves the error in `status_message`.
pub fn open_file_dialog(state: &mut AppState) -> Option<DashboardEvent> {
    let path = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()?;

    match crate::data::loader::load_file(&path) {
        Ok(table) => Some(DashboardEvent::DatasetLoaded(table)),
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
            None
        }
    }
}
