use eframe::egui::{self, Color32, RichText};

use crate::state::{AppState, DashboardEvent};
use crate::ui::{panels, plot, table};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    pub state: AppState,
}

impl LaunchDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<DashboardEvent> = Vec::new();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &mut events);
        });

        // ---- Left side panel: site dropdown + payload range ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &mut events);
            });

        // ---- Bottom panel: launches in range ----
        egui::TopBottomPanel::bottom("launch_table")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                table::launch_table(ui, &self.state);
            });

        // ---- Central panel: heading, pie, scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new(DASHBOARD_TITLE)
                        .size(32.0)
                        .color(Color32::from_rgb(0x50, 0x3D, 0x36)),
                );
            });
            ui.add_space(8.0);

            // Each chart gets just under half of what is left below the heading.
            let chart_height = (ui.available_height() / 2.0 - 30.0).max(120.0);
            plot::outcome_pie(ui, &self.state, chart_height);
            ui.add_space(8.0);
            plot::payload_scatter(ui, &self.state, chart_height);
        });

        for event in events {
            self.state.handle(event);
        }
    }
}
