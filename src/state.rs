use std::sync::Arc;

use crate::data::filter::{filter_for_proportion, filter_for_scatter, PayloadRange, SiteSelector};
use crate::data::model::LaunchDataset;
use crate::data::shape::{shape_proportion, shape_scatter, ProportionSpec, ScatterSpec};

// ---------------------------------------------------------------------------
// Context and events
// ---------------------------------------------------------------------------

/// Read-only inputs shared by every recomputation.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub dataset: Arc<LaunchDataset>,
}

impl DashboardContext {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self { dataset }
    }
}

/// A change on one of the two controls.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Raw dropdown value.
    SiteSelected(String),
    PayloadRangeChanged(PayloadRange),
}

/// Which outputs a transition rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Recomputed {
    pub proportion: bool,
    pub scatter: bool,
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Control inputs plus the charts derived from them. Transitions never
/// mutate; they return the next state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub site: SiteSelector,
    pub payload: PayloadRange,
    pub proportion: Arc<ProportionSpec>,
    pub scatter: Arc<ScatterSpec>,
}

impl DashboardState {
    /// All sites, payload range spanning the dataset, both charts built.
    pub fn initial(ctx: &DashboardContext) -> Self {
        let site = SiteSelector::All;
        let payload = PayloadRange::new(ctx.dataset.min_payload(), ctx.dataset.max_payload());
        let state = DashboardState {
            proportion: Arc::new(proportion_chart(ctx, &site)),
            scatter: Arc::new(scatter_chart(ctx, &site, payload)),
            site,
            payload,
        };
        log::debug!(
            "initial state: site={}, payload={}..{}",
            state.site.value(),
            payload.low(),
            payload.high()
        );
        state
    }

    /// Next state after `event`.
    ///
    /// A site change rebuilds both charts; the scatter title depends on the
    /// site too. A payload change rebuilds only the scatter chart and hands
    /// the proportion chart over untouched.
    pub fn apply(&self, ctx: &DashboardContext, event: ControlEvent) -> (Self, Recomputed) {
        match event {
            ControlEvent::SiteSelected(value) => {
                let site = SiteSelector::resolve(&value, &ctx.dataset);
                let next = DashboardState {
                    proportion: Arc::new(proportion_chart(ctx, &site)),
                    scatter: Arc::new(scatter_chart(ctx, &site, self.payload)),
                    site,
                    payload: self.payload,
                };
                let recomputed = Recomputed {
                    proportion: true,
                    scatter: true,
                };
                (next, recomputed)
            }
            ControlEvent::PayloadRangeChanged(payload) => {
                let next = DashboardState {
                    site: self.site.clone(),
                    payload,
                    proportion: Arc::clone(&self.proportion),
                    scatter: Arc::new(scatter_chart(ctx, &self.site, payload)),
                };
                let recomputed = Recomputed {
                    proportion: false,
                    scatter: true,
                };
                (next, recomputed)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

fn proportion_chart(ctx: &DashboardContext, site: &SiteSelector) -> ProportionSpec {
    let rows = filter_for_proportion(&ctx.dataset, site);
    let spec = shape_proportion(&rows, site);
    trace_spec("proportion", &spec);
    spec
}

fn scatter_chart(ctx: &DashboardContext, site: &SiteSelector, payload: PayloadRange) -> ScatterSpec {
    let rows = filter_for_scatter(&ctx.dataset, site, payload);
    let spec = shape_scatter(&rows, site);
    trace_spec("scatter", &spec);
    spec
}

fn trace_spec<T: serde::Serialize>(name: &str, spec: &T) {
    if log::log_enabled!(log::Level::Trace) {
        match serde_json::to_string(spec) {
            Ok(json) => log::trace!("{name} chart: {json}"),
            Err(e) => log::warn!("could not serialise {name} chart: {e}"),
        }
    }
}
