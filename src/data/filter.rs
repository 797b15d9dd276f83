use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Control inputs
// ---------------------------------------------------------------------------

/// Dropdown value for the all-sites view.
pub const ALL_SITES: &str = "All";

/// Site dropdown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelector {
    All,
    Site(String),
}

impl SiteSelector {
    /// Resolve a raw dropdown value against the dataset.
    ///
    /// `"All"` and anything that is not a known site resolve to
    /// [`SiteSelector::All`]. That includes `"None"`, which no control ever
    /// emits; it is kept only because older dashboards treated it as "All".
    pub fn resolve(value: &str, dataset: &LaunchDataset) -> Self {
        if value != ALL_SITES && dataset.has_site(value) {
            SiteSelector::Site(value.to_string())
        } else {
            if value != ALL_SITES {
                log::debug!("site selector {value:?} is not a known site, using all sites");
            }
            SiteSelector::All
        }
    }

    /// Dropdown value for this selector.
    pub fn value(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(site) => site,
        }
    }

    /// The site to narrow to, or `None` for the all-sites behaviour.
    fn known_site<'a>(&'a self, dataset: &LaunchDataset) -> Option<&'a str> {
        match self {
            SiteSelector::Site(site) if dataset.has_site(site) => Some(site.as_str()),
            _ => None,
        }
    }
}

/// Payload mass window in kg. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { low: a, high: b }
        } else {
            PayloadRange { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Exclusive on both ends.
    pub fn contains(&self, payload: f64) -> bool {
        self.low < payload && payload < self.high
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Rows feeding the proportion chart.
///
/// * all sites → successful launches only, every site
/// * one site  → every launch at that site, any outcome
pub fn filter_for_proportion<'a>(
    dataset: &'a LaunchDataset,
    selector: &SiteSelector,
) -> Vec<&'a LaunchRecord> {
    match selector.known_site(dataset) {
        None => dataset
            .records()
            .iter()
            .filter(|rec| rec.outcome.is_success())
            .collect(),
        Some(site) => dataset
            .records()
            .iter()
            .filter(|rec| rec.site == site)
            .collect(),
    }
}

/// Rows feeding the scatter chart: site-narrowed (unless all sites), then
/// kept only when `low < payload < high`.
pub fn filter_for_scatter<'a>(
    dataset: &'a LaunchDataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    let site = selector.known_site(dataset);
    dataset
        .records()
        .iter()
        .filter(|rec| site.map_or(true, |s| rec.site == s))
        .filter(|rec| range.contains(rec.payload_mass_kg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, Outcome};

    fn two_sites() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 1000.0, 1, "FT"),
            record("B", 2000.0, 0, "v1.1"),
            record("A", 3000.0, 1, "B4"),
            record("B", 4000.0, 1, "FT"),
            record("A", 5000.0, 0, "v1.0"),
            record("B", 6000.0, 0, "B5"),
        ])
    }

    #[test]
    fn resolve_maps_unknown_values_to_all() {
        let ds = two_sites();
        assert_eq!(SiteSelector::resolve("All", &ds), SiteSelector::All);
        assert_eq!(SiteSelector::resolve("None", &ds), SiteSelector::All);
        assert_eq!(SiteSelector::resolve("Mars", &ds), SiteSelector::All);
        assert_eq!(
            SiteSelector::resolve("B", &ds),
            SiteSelector::Site("B".to_string())
        );
        assert_eq!(SiteSelector::Site("B".to_string()).value(), "B");
        assert_eq!(SiteSelector::All.value(), "All");
    }

    #[test]
    fn proportion_for_site_keeps_every_outcome_of_that_site() {
        let ds = two_sites();
        let rows = filter_for_proportion(&ds, &SiteSelector::Site("A".into()));
        let expected = ds.records().iter().filter(|r| r.site == "A").count();
        assert_eq!(rows.len(), expected);
        assert!(rows.iter().all(|r| r.site == "A"));
        assert!(rows.iter().any(|r| r.outcome == Outcome::Failure));
    }

    #[test]
    fn proportion_for_all_keeps_only_successes() {
        let ds = two_sites();
        let rows = filter_for_proportion(&ds, &SiteSelector::All);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.outcome == Outcome::Success));
    }

    #[test]
    fn none_selector_behaves_like_all() {
        let ds = two_sites();
        let none = SiteSelector::resolve("None", &ds);
        assert_eq!(
            filter_for_proportion(&ds, &none),
            filter_for_proportion(&ds, &SiteSelector::All)
        );
    }

    #[test]
    fn unresolved_unknown_site_falls_back_to_all_sites() {
        let ds = two_sites();
        let stray = SiteSelector::Site("Mars".into());
        assert_eq!(
            filter_for_proportion(&ds, &stray),
            filter_for_proportion(&ds, &SiteSelector::All)
        );
        let range = PayloadRange::new(0.0, 10_000.0);
        assert_eq!(filter_for_scatter(&ds, &stray, range).len(), ds.len());
    }

    #[test]
    fn scatter_bounds_are_strict() {
        let ds = two_sites();
        let rows = filter_for_scatter(&ds, &SiteSelector::All, PayloadRange::new(0.0, 5000.0));
        let payloads: Vec<f64> = rows.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, [1000.0, 2000.0, 3000.0, 4000.0]);

        let rows = filter_for_scatter(&ds, &SiteSelector::All, PayloadRange::new(1000.0, 6000.0));
        assert!(rows
            .iter()
            .all(|r| 1000.0 < r.payload_mass_kg && r.payload_mass_kg < 6000.0));
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn scatter_with_degenerate_range_is_empty() {
        let ds = two_sites();
        for x in [0.0, 1000.0, 3000.0, 10_000.0] {
            let range = PayloadRange::new(x, x);
            assert!(filter_for_scatter(&ds, &SiteSelector::All, range).is_empty());
            assert!(filter_for_scatter(&ds, &SiteSelector::Site("A".into()), range).is_empty());
        }
    }

    #[test]
    fn scatter_for_site_applies_both_filters() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "FT"),
            record("A", 5000.0, 0, "FT"),
            record("A", 9500.0, 1, "B4"),
            record("B", 5000.0, 1, "FT"),
        ]);
        let rows = filter_for_scatter(
            &ds,
            &SiteSelector::Site("A".into()),
            PayloadRange::new(1000.0, 9000.0),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].site, "A");
        assert_eq!(rows[0].payload_mass_kg, 5000.0);
    }

    #[test]
    fn payload_range_orders_its_bounds() {
        let range = PayloadRange::new(9000.0, 1000.0);
        assert_eq!(range.low(), 1000.0);
        assert_eq!(range.high(), 9000.0);
    }
}
