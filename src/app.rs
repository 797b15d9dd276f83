use std::sync::Arc;

use eframe::egui::{self, ScrollArea, Ui};

use crate::color::ColorMap;
use crate::data::model::{LaunchDataset, Outcome};
use crate::state::{ControlEvent, DashboardContext, DashboardState};
use crate::ui::{panels, plot};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    ctx: DashboardContext,
    state: DashboardState,
    /// Sites and outcome labels share one map so every pie slice has a
    /// colour that is stable across selections.
    slice_colors: ColorMap,
    booster_colors: ColorMap,
}

impl LaunchDashApp {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let outcome_labels = [Outcome::Success.to_string(), Outcome::Failure.to_string()];
        let slice_colors = ColorMap::new(
            dataset
                .sites()
                .iter()
                .map(String::as_str)
                .chain(outcome_labels.iter().map(String::as_str)),
        );

        let mut categories: Vec<&str> = Vec::new();
        for rec in dataset.records() {
            if !categories.contains(&rec.booster_version_category.as_str()) {
                categories.push(&rec.booster_version_category);
            }
        }
        let booster_colors = ColorMap::new(categories);

        let ctx = DashboardContext::new(Arc::clone(&dataset));
        let state = DashboardState::initial(&ctx);

        Self {
            ctx,
            state,
            slice_colors,
            booster_colors,
        }
    }

    /// Feed a control event through the state transition and swap in the
    /// result.
    fn dispatch(&mut self, event: ControlEvent) {
        log::debug!("control event: {event:?}");
        let (next, recomputed) = self.state.apply(&self.ctx, event);
        log::debug!(
            "site={}, payload={}..{}, recomputed proportion={} scatter={}",
            next.site.value(),
            next.payload.low(),
            next.payload.high(),
            recomputed.proportion,
            recomputed.scatter
        );
        self.state = next;
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.ctx.dataset);
        });

        // ---- Central panel: controls and both charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    let site_event = panels::site_dropdown(ui, &self.ctx.dataset, &self.state);
                    if let Some(event) = site_event {
                        self.dispatch(event);
                    }
                    plot::proportion_chart(ui, &self.state.proportion, &self.slice_colors, CHART_HEIGHT);

                    ui.separator();

                    if let Some(event) = panels::payload_range(ui, &self.state) {
                        self.dispatch(event);
                    }
                    plot::scatter_chart(ui, &self.state.scatter, &self.booster_colors, CHART_HEIGHT);
                });
        });
    }
}
