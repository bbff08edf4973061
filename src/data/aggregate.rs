use std::collections::BTreeMap;

use super::model::{LaunchTable, OutcomeClass, SiteSelection};

// ---------------------------------------------------------------------------
// Aggregate rows feeding the outcome pie chart
// ---------------------------------------------------------------------------

/// Successful launches per site (the "All Sites" view).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSuccesses {
    pub site: String,
    pub success_count: usize,
}

/// Launch count per outcome class at a single site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeCount {
    pub outcome_class: OutcomeClass,
    pub row_count: usize,
}

/// Result of [`aggregate`]; the variant follows the site selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeAggregate {
    BySite(Vec<SiteSuccesses>),
    ByOutcome {
        site: String,
        counts: Vec<OutcomeCount>,
    },
}

impl OutcomeAggregate {
    /// Chart title for this aggregate.
    pub fn title(&self) -> String {
        match self {
            OutcomeAggregate::BySite(_) => "Total Success Launches by Site".to_string(),
            OutcomeAggregate::ByOutcome { site, .. } => {
                format!("Total Success Launches for {site}")
            }
        }
    }

    /// `(category_label, value)` pairs in row order.
    pub fn slices(&self) -> Vec<(String, usize)> {
        match self {
            OutcomeAggregate::BySite(rows) => rows
                .iter()
                .map(|r| (r.site.clone(), r.success_count))
                .collect(),
            OutcomeAggregate::ByOutcome { counts, .. } => counts
                .iter()
                .map(|c| (c.outcome_class.to_string(), c.row_count))
                .collect(),
        }
    }

    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        match self {
            OutcomeAggregate::BySite(rows) => rows.iter().map(|r| r.success_count).sum(),
            OutcomeAggregate::ByOutcome { counts, .. } => counts.iter().map(|c| c.row_count).sum(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OutcomeAggregate::BySite(rows) => rows.len(),
            OutcomeAggregate::ByOutcome { counts, .. } => counts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Summarise launch outcomes for the pie chart.
///
/// * [`SiteSelection::All`] → one row per site with its number of successes
///   (sites with only failures appear with `0`).
/// * [`SiteSelection::Site`] → one row per outcome class that occurs at that
///   site, with the number of launches. An unknown site yields no rows.
///
/// Groups come out key-ordered: sites lexicographically, class 0 before 1.
pub fn aggregate(table: &LaunchTable, selected_site: &SiteSelection) -> OutcomeAggregate {
    match selected_site {
        SiteSelection::All => {
            let mut per_site: BTreeMap<&str, usize> = BTreeMap::new();
            for rec in table.records() {
                *per_site.entry(rec.site.as_str()).or_default() +=
                    usize::from(rec.outcome_class.value());
            }
            OutcomeAggregate::BySite(
                per_site
                    .into_iter()
                    .map(|(site, success_count)| SiteSuccesses {
                        site: site.to_string(),
                        success_count,
                    })
                    .collect(),
            )
        }
        SiteSelection::Site(site) => {
            let mut per_class: BTreeMap<OutcomeClass, usize> = BTreeMap::new();
            for rec in table.records().iter().filter(|r| &r.site == site) {
                *per_class.entry(rec.outcome_class).or_default() += 1;
            }
            OutcomeAggregate::ByOutcome {
                site: site.clone(),
                counts: per_class
                    .into_iter()
                    .map(|(outcome_class, row_count)| OutcomeCount {
                        outcome_class,
                        row_count,
                    })
                    .collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn sample_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS", 5000.0, OutcomeClass::Success, "v1.1"),
            LaunchRecord::new("CCAFS", 3000.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("KSC", 7000.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn all_sites_sums_successes_per_site() {
        let agg = aggregate(&sample_table(), &SiteSelection::All);
        assert_eq!(
            agg,
            OutcomeAggregate::BySite(vec![
                SiteSuccesses { site: "CCAFS".into(), success_count: 1 },
                SiteSuccesses { site: "KSC".into(), success_count: 1 },
            ])
        );
        assert_eq!(agg.title(), "Total Success Launches by Site");
        assert_eq!(agg.total(), 2);
    }

    #[test]
    fn single_site_counts_each_outcome() {
        let agg = aggregate(&sample_table(), &SiteSelection::Site("CCAFS".into()));
        assert_eq!(
            agg.slices(),
            vec![("0".to_string(), 1), ("1".to_string(), 1)]
        );
        assert_eq!(agg.title(), "Total Success Launches for CCAFS");
    }

    #[test]
    fn site_with_one_outcome_yields_one_row() {
        let agg = aggregate(&sample_table(), &SiteSelection::Site("KSC".into()));
        assert_eq!(
            agg,
            OutcomeAggregate::ByOutcome {
                site: "KSC".into(),
                counts: vec![OutcomeCount {
                    outcome_class: OutcomeClass::Success,
                    row_count: 1
                }],
            }
        );
    }

    #[test]
    fn zero_success_site_still_appears() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("VAFB", 100.0, OutcomeClass::Failure, "FT"),
            LaunchRecord::new("KSC", 200.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap();
        let agg = aggregate(&table, &SiteSelection::All);
        assert_eq!(
            agg.slices(),
            vec![("KSC".to_string(), 1), ("VAFB".to_string(), 0)]
        );
    }

    #[test]
    fn unknown_site_is_empty_not_an_error() {
        let agg = aggregate(&sample_table(), &SiteSelection::Site("Boca Chica".into()));
        assert!(agg.is_empty());
        assert_eq!(agg.total(), 0);
    }
}
