use super::model::{LaunchRecord, LaunchTable, OutcomeClass, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Payload / site filter feeding the scatter chart
// ---------------------------------------------------------------------------

/// Return indices of records whose payload lies strictly inside `range` and
/// whose site passes `selected_site`, in table order.
pub fn filtered_indices(
    table: &LaunchTable,
    selected_site: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg) && selected_site.matches(&rec.site))
        .map(|(i, _)| i)
        .collect()
}

/// Same subset as [`filtered_indices`], borrowed straight from the table.
pub fn filter_rows<'a>(
    table: &'a LaunchTable,
    selected_site: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    let records = table.records();
    filtered_indices(table, selected_site, range)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// One scatter marker: payload on x, outcome on y, coloured by booster category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint<'a> {
    pub payload_mass_kg: f64,
    pub outcome_class: OutcomeClass,
    pub color_category: &'a str,
}

/// Project filtered rows onto scatter markers.
pub fn scatter_points<'a>(table: &'a LaunchTable, indices: &[usize]) -> Vec<ScatterPoint<'a>> {
    let records = table.records();
    indices
        .iter()
        .filter_map(|&i| records.get(i))
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            outcome_class: rec.outcome_class,
            color_category: rec.booster_version_category.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS", 5000.0, OutcomeClass::Success, "v1.1"),
            LaunchRecord::new("CCAFS", 3000.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("KSC", 7000.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn all_sites_uses_strict_upper_bound() {
        let table = sample_table();
        let rows = filter_rows(&table, &SiteSelection::All, PayloadRange::new(2000.0, 6000.0));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &table.records()[0]);
        assert_eq!(rows[1], &table.records()[1]);
    }

    #[test]
    fn boundary_values_are_excluded() {
        let table = sample_table();
        let idx = filtered_indices(&table, &SiteSelection::All, PayloadRange::new(3000.0, 7000.0));
        assert_eq!(idx, vec![0]);
    }

    #[test]
    fn single_site_restricts_rows() {
        let table = sample_table();
        let rows = filter_rows(
            &table,
            &SiteSelection::Site("KSC".into()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(rows, vec![&table.records()[2]]);
    }

    #[test]
    fn unknown_site_and_degenerate_range_are_empty() {
        let table = sample_table();
        assert!(filter_rows(
            &table,
            &SiteSelection::Site("Nowhere".into()),
            PayloadRange::new(0.0, 10000.0)
        )
        .is_empty());
        assert!(filter_rows(&table, &SiteSelection::All, PayloadRange::new(5000.0, 5000.0)).is_empty());
        assert!(filter_rows(&table, &SiteSelection::All, PayloadRange::new(9000.0, 1000.0)).is_empty());
    }

    #[test]
    fn scatter_points_carry_category() {
        let table = sample_table();
        let idx = filtered_indices(&table, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
        let points = scatter_points(&table, &idx);
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].color_category, "FT");
        assert_eq!(points[1].outcome_class, OutcomeClass::Failure);
        assert_eq!(points[0].payload_mass_kg, 5000.0);
    }
}
