use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Column names as they appear in the launch dataset.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// OutcomeClass – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as recorded in the `class` column (0 = failure, 1 = success).
///
/// Variant order matches the numeric value so grouping by class sorts 0 before 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    /// Numeric value of the class, as stored in the dataset.
    pub fn value(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl TryFrom<i64> for OutcomeClass {
    type Error = TableError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(TableError::InvalidOutcome(other)),
        }
    }
}

impl From<OutcomeClass> for i64 {
    fn from(class: OutcomeClass) -> Self {
        i64::from(class.value())
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt. Columns not listed here are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,

    #[serde(rename = "Launch Site")]
    pub site: String,

    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    #[serde(rename = "class")]
    pub outcome_class: OutcomeClass,

    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,

    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Minimal record with only the columns the dashboard reads.
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome_class: OutcomeClass,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            site: site.into(),
            payload_mass_kg,
            outcome_class,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the dropdown value
// ---------------------------------------------------------------------------

/// Dropdown value: the synthetic "All Sites" entry or one concrete site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Value used for the "All Sites" entry.
    pub const ALL_VALUE: &'static str = "ALL";

    /// Parse a dropdown value; `"ALL"` maps to [`SiteSelection::All`].
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record's site passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }

    /// Human-readable dropdown label.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name.as_str(),
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(Self::ALL_VALUE),
            SiteSelection::Site(name) => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – the slider value
// ---------------------------------------------------------------------------

/// Payload bounds in kilograms. Both ends are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `low < mass < high`. Boundary values are excluded.
    pub fn contains(&self, mass: f64) -> bool {
        self.low < mass && mass < self.high
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}–{:.0} kg", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// LaunchTable – the immutable, loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset plus the indices computed once at load time.
///
/// Built only through [`LaunchTable::from_records`] and never mutated
/// afterwards; both core functions and the UI take it by reference.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    booster_categories: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchTable {
    /// Validate rows and compute site list and payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (row, rec) in records.iter().enumerate() {
            let mass = rec.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(TableError::InvalidPayload {
                    record: row + 1,
                    value: mass,
                });
            }
            min_payload = min_payload.min(mass);
            max_payload = max_payload.max(mass);

            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
        }

        Ok(Self {
            records,
            sites,
            booster_categories,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in first-occurrence order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Distinct booster categories in first-occurrence order.
    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Dropdown entries: "All Sites" followed by every site.
    pub fn site_options(&self) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(self.sites.iter().cloned().map(SiteSelection::Site))
            .collect()
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, mass: f64, class: OutcomeClass) -> LaunchRecord {
        LaunchRecord::new(site, mass, class, "FT")
    }

    #[test]
    fn sites_keep_first_occurrence_order() {
        let table = LaunchTable::from_records(vec![
            rec("KSC LC-39A", 100.0, OutcomeClass::Success),
            rec("CCAFS LC-40", 200.0, OutcomeClass::Failure),
            rec("KSC LC-39A", 300.0, OutcomeClass::Failure),
            rec("VAFB SLC-4E", 400.0, OutcomeClass::Success),
        ])
        .unwrap();

        assert_eq!(table.sites(), ["KSC LC-39A", "CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(table.min_payload(), 100.0);
        assert_eq!(table.max_payload(), 400.0);

        let options = table.site_options();
        assert_eq!(options[0], SiteSelection::All);
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(
            LaunchTable::from_records(Vec::new()).unwrap_err(),
            TableError::Empty
        );
    }

    #[test]
    fn negative_or_nan_payload_is_rejected() {
        let err = LaunchTable::from_records(vec![
            rec("A", 10.0, OutcomeClass::Success),
            rec("A", -1.0, OutcomeClass::Success),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::InvalidPayload { record: 2, value: -1.0 });
        assert!(err.to_string().starts_with("launch record 2:"));

        assert!(LaunchTable::from_records(vec![rec("A", f64::NAN, OutcomeClass::Success)]).is_err());
    }

    #[test]
    fn outcome_class_accepts_only_zero_and_one() {
        assert_eq!(OutcomeClass::try_from(0), Ok(OutcomeClass::Failure));
        assert_eq!(OutcomeClass::try_from(1), Ok(OutcomeClass::Success));
        assert_eq!(OutcomeClass::try_from(2), Err(TableError::InvalidOutcome(2)));
        assert!(OutcomeClass::Failure < OutcomeClass::Success);
    }

    #[test]
    fn site_selection_parses_sentinel() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        assert_eq!(SiteSelection::All.label(), "All Sites");
        assert_eq!(SiteSelection::All.to_string(), "ALL");
        assert!(SiteSelection::All.matches("anything"));
        assert!(!SiteSelection::Site("A".into()).matches("B"));
    }

    #[test]
    fn payload_range_is_exclusive() {
        let range = PayloadRange::new(2000.0, 6000.0);
        assert!(range.contains(5000.0));
        assert!(!range.contains(2000.0));
        assert!(!range.contains(6000.0));
        assert!(!PayloadRange::new(3000.0, 3000.0).contains(3000.0));
    }
}
