use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome. Stored in the source file as `0` / `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value as it appears in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure (0)"),
            Outcome::Success => write!(f, "Success (1)"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with bounds and site list computed once.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    /// Distinct sites in order of first occurrence (dropdown order).
    sites: Vec<String>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.iter().any(|s| *s == rec.site) {
                sites.push(rec.site.clone());
            }
        }

        let (min_payload, max_payload) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), rec| (lo.min(rec.payload_mass_kg), hi.max(rec.payload_mass_kg)),
            )
        };

        LaunchDataset {
            records,
            min_payload,
            max_payload,
            sites,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
pub(crate) fn record(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
    LaunchRecord {
        site: site.to_string(),
        payload_mass_kg: payload,
        outcome: Outcome::from_class(class).expect("class must be 0 or 1"),
        booster_version_category: booster.to_string(),
    }
}
