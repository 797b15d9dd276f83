// ---------------------------------------------------------------------------
// Compile-time configuration
// ---------------------------------------------------------------------------

/// Dataset location, relative to the working directory.
pub const DATA_PATH: &str = "spacex_launch_dash.csv";

/// Payload range control domain (kg). Fixed regardless of the data bounds.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Hole fraction used for the single-site donut chart.
pub const DONUT_HOLE: f64 = 0.2;

pub const WINDOW_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 900.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [600.0, 400.0];
