use eframe::egui::{self, Align2, Color32, FontId, RichText, Slider, SliderClamping, Ui};

use crate::config::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};
use crate::data::filter::{PayloadRange, ALL_SITES};
use crate::data::model::LaunchDataset;
use crate::state::{ControlEvent, DashboardState};

const TITLE_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);
const ALL_SITES_LABEL: &str = "All Sites";
const MARK_ROW_HEIGHT: f32 = 14.0;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui, dataset: &LaunchDataset) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(32.0)
                .strong()
                .color(TITLE_COLOR),
        );
        ui.label(format!(
            "{} launches from {} sites",
            dataset.len(),
            dataset.sites().len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Searchable launch site dropdown. Returns an event only when the user
/// picks a value different from the current one.
pub fn site_dropdown(
    ui: &mut Ui,
    dataset: &LaunchDataset,
    state: &DashboardState,
) -> Option<ControlEvent> {
    let current = state.site.value();
    let current_label = if current == ALL_SITES { ALL_SITES_LABEL } else { current };

    let search_id = ui.make_persistent_id("site_dropdown_search");
    let mut query: String = ui.data(|d| d.get_temp(search_id)).unwrap_or_default();
    let mut picked = None;

    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current_label)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(egui::TextEdit::singleline(&mut query).hint_text("Select a Launch Site here"));
            for (value, label) in site_options(dataset) {
                if !matches_query(label, &query) {
                    continue;
                }
                if ui.selectable_label(current == value, label).clicked() {
                    picked = selection_event(current, value);
                }
            }
        });

    if picked.is_some() {
        query.clear();
    }
    ui.data_mut(|d| d.insert_temp(search_id, query));
    picked
}

/// `(value, label)` pairs: "All Sites" first, then sites in dataset order.
fn site_options(dataset: &LaunchDataset) -> Vec<(&str, &str)> {
    std::iter::once((ALL_SITES, ALL_SITES_LABEL))
        .chain(dataset.sites().iter().map(|s| (s.as_str(), s.as_str())))
        .collect()
}

/// Case-insensitive substring match; an empty query matches everything.
fn matches_query(label: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || label.to_lowercase().contains(&query.to_lowercase())
}

fn selection_event(current: &str, value: &str) -> Option<ControlEvent> {
    (current != value).then(|| ControlEvent::SiteSelected(value.to_string()))
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Two-handle payload range control over the fixed slider domain.
///
/// Sliders never clamp on their own: the initial range is the dataset's
/// true bounds, which need not sit on a step.
pub fn payload_range(ui: &mut Ui, state: &DashboardState) -> Option<ControlEvent> {
    ui.label("Payload range (Kg):");

    let mut low = state.payload.low();
    let mut high = state.payload.high();

    let low_changed = ui
        .add(payload_slider(&mut low).text("min"))
        .changed();
    let high_changed = ui
        .add(payload_slider(&mut high).text("max"))
        .changed();
    slider_marks_row(ui);

    if !(low_changed || high_changed) {
        return None;
    }
    next_range(state.payload, low, high, low_changed).map(ControlEvent::PayloadRangeChanged)
}

fn payload_slider(value: &mut f64) -> Slider<'_> {
    Slider::new(value, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
        .step_by(PAYLOAD_SLIDER_STEP)
        .clamping(SliderClamping::Never)
}

/// Range after a handle moved, or `None` if nothing actually changed.
/// Values are kept inside the slider domain and the handles cannot cross:
/// the one being moved pushes the other.
fn next_range(current: PayloadRange, low: f64, high: f64, low_moved: bool) -> Option<PayloadRange> {
    let mut low = low.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
    let mut high = high.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
    if low > high {
        if low_moved {
            high = low;
        } else {
            low = high;
        }
    }
    let next = PayloadRange::new(low, high);
    (next != current).then_some(next)
}

/// Labelled marks every step across the slider domain.
fn slider_marks() -> Vec<f64> {
    let steps = ((PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN) / PAYLOAD_SLIDER_STEP).round() as usize;
    (0..=steps)
        .map(|i| PAYLOAD_SLIDER_MIN + i as f64 * PAYLOAD_SLIDER_STEP)
        .collect()
}

fn slider_marks_row(ui: &mut Ui) {
    let width = ui.spacing().slider_width;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, MARK_ROW_HEIGHT), egui::Sense::hover());
    let color = ui.visuals().weak_text_color();
    let span = PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN;
    for mark in slider_marks() {
        let t = ((mark - PAYLOAD_SLIDER_MIN) / span) as f32;
        ui.painter().text(
            egui::pos2(rect.left() + t * rect.width(), rect.center().y),
            Align2::CENTER_CENTER,
            format!("{mark:.0}"),
            FontId::proportional(10.0),
            color,
        );
    }
}
