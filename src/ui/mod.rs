/// Rendering: control widgets and chart panes. Nothing here filters or
/// aggregates; panels emit [`crate::state::ControlEvent`]s and plots draw
/// the specs they are handed.
pub mod panels;
pub mod plot;
