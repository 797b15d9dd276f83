use serde::Serialize;

use crate::config::DONUT_HOLE;

use super::filter::SiteSelector;
use super::model::{LaunchRecord, Outcome};

/// Decorative separator between a title and the selected site.
const SITE_ARROW: char = '\u{21A0}';

// ---------------------------------------------------------------------------
// Chart specs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PieStyle {
    Pie,
    /// `hole` is the inner radius as a fraction of the outer radius.
    Donut { hole: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: usize,
}

/// Everything the proportion pane needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionSpec {
    pub title: String,
    pub style: PieStyle,
    pub slices: Vec<Slice>,
}

impl ProportionSpec {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    /// Colour encoding (booster version category).
    pub category: String,
    /// Marker size encoding; the payload mass again.
    pub size: f64,
}

/// Everything the scatter pane needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub points: Vec<ScatterPoint>,
    /// Distinct categories in first-occurrence order, for legend and colours.
    pub categories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Shaping
// ---------------------------------------------------------------------------

/// Group filtered rows for the proportion chart.
///
/// For all sites the rows are successes and each site's slice is its
/// success count. For one site the rows are that site's launches and the
/// slices split them by outcome class.
pub fn shape_proportion(records: &[&LaunchRecord], selector: &SiteSelector) -> ProportionSpec {
    match selector {
        SiteSelector::All => {
            let mut slices: Vec<Slice> = Vec::new();
            for rec in records {
                let value = usize::from(rec.outcome.class());
                match slices.iter_mut().find(|s| s.label == rec.site) {
                    Some(slice) => slice.value += value,
                    None => slices.push(Slice {
                        label: rec.site.clone(),
                        value,
                    }),
                }
            }
            ProportionSpec {
                title: "Total Success Launches by All Sites".to_string(),
                style: PieStyle::Pie,
                slices,
            }
        }
        SiteSelector::Site(site) => {
            let mut counts: Vec<(Outcome, usize)> = Vec::new();
            for rec in records {
                match counts.iter_mut().find(|(o, _)| *o == rec.outcome) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((rec.outcome, 1)),
                }
            }
            ProportionSpec {
                title: format!("Total Success Launches for Site {SITE_ARROW} {site}"),
                style: PieStyle::Donut { hole: DONUT_HOLE },
                slices: counts
                    .into_iter()
                    .map(|(outcome, value)| Slice {
                        label: outcome.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
    }
}

/// One point per filtered row: x = payload, y = class, colour = booster
/// category, size = payload.
pub fn shape_scatter(records: &[&LaunchRecord], selector: &SiteSelector) -> ScatterSpec {
    let mut categories: Vec<String> = Vec::new();
    let points = records
        .iter()
        .map(|rec| {
            if !categories.contains(&rec.booster_version_category) {
                categories.push(rec.booster_version_category.clone());
            }
            ScatterPoint {
                payload_mass_kg: rec.payload_mass_kg,
                class: rec.outcome.class(),
                category: rec.booster_version_category.clone(),
                size: rec.payload_mass_kg,
            }
        })
        .collect();

    let title = match selector {
        SiteSelector::All => "Correlation - Payload vs Success - All Sites".to_string(),
        SiteSelector::Site(site) => {
            format!("Correlation - Payload vs Success - Site {SITE_ARROW} {site}")
        }
    };

    ScatterSpec {
        title,
        points,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_for_proportion, filter_for_scatter, PayloadRange};
    use crate::data::model::{record, LaunchDataset};

    /// A: 2 successes / 1 failure, B: 1 success / 2 failures.
    fn scenario() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "v1.0"),
            record("A", 5000.0, 1, "FT"),
            record("B", 2500.0, 0, "v1.1"),
            record("A", 9500.0, 0, "FT"),
            record("B", 3600.0, 1, "B4"),
            record("B", 7000.0, 0, "B5"),
        ])
    }

    fn slices(spec: &ProportionSpec) -> Vec<(&str, usize)> {
        spec.slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect()
    }

    #[test]
    fn all_sites_pie_counts_successes_per_site() {
        let ds = scenario();
        let spec = shape_proportion(
            &filter_for_proportion(&ds, &SiteSelector::All),
            &SiteSelector::All,
        );
        assert_eq!(slices(&spec), [("A", 2), ("B", 1)]);
        assert_eq!(spec.title, "Total Success Launches by All Sites");
        assert_eq!(spec.style, PieStyle::Pie);
        assert_eq!(spec.total(), 3);
    }

    #[test]
    fn single_site_donut_splits_by_outcome() {
        let ds = scenario();
        let site = SiteSelector::Site("A".into());
        let spec = shape_proportion(&filter_for_proportion(&ds, &site), &site);
        assert_eq!(slices(&spec), [("Success (1)", 2), ("Failure (0)", 1)]);
        assert_eq!(spec.title, "Total Success Launches for Site \u{21A0} A");
        assert_eq!(spec.style, PieStyle::Donut { hole: DONUT_HOLE });

        let site = SiteSelector::Site("B".into());
        let spec = shape_proportion(&filter_for_proportion(&ds, &site), &site);
        assert_eq!(slices(&spec), [("Failure (0)", 2), ("Success (1)", 1)]);
    }

    #[test]
    fn scatter_points_carry_encodings() {
        let ds = scenario();
        let site = SiteSelector::Site("A".into());
        let rows = filter_for_scatter(&ds, &site, PayloadRange::new(1000.0, 9000.0));
        let spec = shape_scatter(&rows, &site);

        assert_eq!(spec.points.len(), 1);
        let point = &spec.points[0];
        assert_eq!(point.payload_mass_kg, 5000.0);
        assert_eq!(point.size, 5000.0);
        assert_eq!(point.class, 1);
        assert_eq!(point.category, "FT");
        assert_eq!(spec.categories, ["FT"]);
        assert_eq!(
            spec.title,
            "Correlation - Payload vs Success - Site \u{21A0} A"
        );
    }

    #[test]
    fn scatter_categories_follow_first_occurrence() {
        let ds = scenario();
        let rows = filter_for_scatter(&ds, &SiteSelector::All, PayloadRange::new(0.0, 10_000.0));
        let spec = shape_scatter(&rows, &SiteSelector::All);
        assert_eq!(spec.points.len(), 6);
        assert_eq!(spec.categories, ["v1.0", "FT", "v1.1", "B4", "B5"]);
        assert_eq!(spec.title, "Correlation - Payload vs Success - All Sites");
    }

    #[test]
    fn empty_rows_still_produce_valid_specs() {
        let site = SiteSelector::Site("A".into());
        let pie = shape_proportion(&[], &site);
        assert!(pie.slices.is_empty());
        assert_eq!(pie.total(), 0);
        assert!(pie.title.ends_with("A"));

        let scatter = shape_scatter(&[], &SiteSelector::All);
        assert!(scatter.points.is_empty());
        assert!(scatter.categories.is_empty());
    }

    #[test]
    fn specs_serialize_for_debug_dumps() {
        let ds = scenario();
        let spec = shape_proportion(
            &filter_for_proportion(&ds, &SiteSelector::All),
            &SiteSelector::All,
        );
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["style"], "Pie");
        assert_eq!(json["slices"][0]["label"], "A");
        assert_eq!(json["slices"][0]["value"], 2);
    }
}
