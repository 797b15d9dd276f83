/// Data layer: core types, loading, filtering and chart shaping.
///
/// Architecture:
/// ```text
///  spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, payload bounds, site list
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selector + payload range → rows per chart
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  shape    │  rows → ProportionSpec / ScatterSpec
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod shape;
