use launch_dashboard::{
    LaunchRecord, LaunchTable, OutcomeAggregate, OutcomeClass, PayloadRange, SiteSelection,
    aggregate, filter_rows,
};
use proptest::prelude::*;

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

fn record_strategy() -> impl Strategy<Value = LaunchRecord> {
    (
        prop::sample::select(SITES.to_vec()),
        (0u32..=100).prop_map(|m| f64::from(m) * 100.0),
        any::<bool>(),
        prop::sample::select(vec!["v1.0", "v1.1", "FT", "B4", "B5"]),
    )
        .prop_map(|(site, mass, success, category)| {
            let class = if success {
                OutcomeClass::Success
            } else {
                OutcomeClass::Failure
            };
            LaunchRecord::new(site, mass, class, category)
        })
}

fn table_strategy() -> impl Strategy<Value = LaunchTable> {
    prop::collection::vec(record_strategy(), 1..60)
        .prop_map(|records| LaunchTable::from_records(records).unwrap())
}

fn range_strategy() -> impl Strategy<Value = PayloadRange> {
    (0u32..=100, 0u32..=100).prop_map(|(a, b)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        PayloadRange::new(f64::from(low) * 100.0, f64::from(high) * 100.0)
    })
}

proptest! {
    #[test]
    fn single_site_counts_cover_every_launch(table in table_strategy()) {
        for site in table.sites() {
            let agg = aggregate(&table, &SiteSelection::Site(site.clone()));
            let expected = table.records().iter().filter(|r| &r.site == site).count();
            prop_assert_eq!(agg.total(), expected);
            prop_assert!(agg.len() <= 2);
        }
    }

    #[test]
    fn all_sites_sums_every_success(table in table_strategy()) {
        let agg = aggregate(&table, &SiteSelection::All);
        let successes = table
            .records()
            .iter()
            .filter(|r| r.outcome_class.is_success())
            .count();
        prop_assert!(agg.len() <= table.sites().len());
        prop_assert_eq!(agg.total(), successes);
        prop_assert!(matches!(agg, OutcomeAggregate::BySite(_)));
    }

    #[test]
    fn all_sites_filter_is_exactly_the_strict_range(
        table in table_strategy(),
        range in range_strategy(),
    ) {
        let rows = filter_rows(&table, &SiteSelection::All, range);
        let expected: Vec<&LaunchRecord> = table
            .records()
            .iter()
            .filter(|r| range.low < r.payload_mass_kg && r.payload_mass_kg < range.high)
            .collect();
        prop_assert_eq!(&rows, &expected);

        // Filtering the result again with the same bounds changes nothing.
        prop_assert!(rows.iter().all(|r| range.contains(r.payload_mass_kg)));
        let kept: Vec<LaunchRecord> = rows.iter().map(|r| (*r).clone()).collect();
        if kept.is_empty() {
            prop_assert!(LaunchTable::from_records(kept).is_err());
        } else {
            let again = LaunchTable::from_records(kept.clone()).unwrap();
            let refiltered: Vec<LaunchRecord> = filter_rows(&again, &SiteSelection::All, range)
                .into_iter()
                .cloned()
                .collect();
            prop_assert_eq!(refiltered, kept);
        }
    }

    #[test]
    fn site_filter_is_a_subset_of_all_sites(
        table in table_strategy(),
        range in range_strategy(),
        site in prop::sample::select(SITES.to_vec()),
    ) {
        let all = filter_rows(&table, &SiteSelection::All, range);
        let one = filter_rows(&table, &SiteSelection::Site(site.to_string()), range);
        for rec in &one {
            prop_assert_eq!(rec.site.as_str(), site);
            prop_assert!(all.iter().any(|r| std::ptr::eq(*r, *rec)));
        }
        prop_assert_eq!(one.len(), all.iter().filter(|r| r.site == site).count());
    }

    #[test]
    fn unknown_site_is_always_empty(
        table in table_strategy(),
        range in range_strategy(),
    ) {
        let unknown = SiteSelection::Site("Starbase".to_string());
        prop_assert!(aggregate(&table, &unknown).is_empty());
        prop_assert!(filter_rows(&table, &unknown, range).is_empty());
    }
}

#[test]
fn worked_example_matches() {
    let table = LaunchTable::from_records(vec![
        LaunchRecord::new("CCAFS", 5000.0, OutcomeClass::Success, "v1.1"),
        LaunchRecord::new("CCAFS", 3000.0, OutcomeClass::Failure, "v1.1"),
        LaunchRecord::new("KSC", 7000.0, OutcomeClass::Success, "FT"),
    ])
    .unwrap();

    assert_eq!(
        aggregate(&table, &SiteSelection::All).slices(),
        vec![("CCAFS".to_string(), 1), ("KSC".to_string(), 1)]
    );
    assert_eq!(
        aggregate(&table, &SiteSelection::from_value("CCAFS")).slices(),
        vec![("0".to_string(), 1), ("1".to_string(), 1)]
    );

    let mid = filter_rows(&table, &SiteSelection::All, PayloadRange::new(2000.0, 6000.0));
    assert_eq!(mid, vec![&table.records()[0], &table.records()[1]]);

    let ksc = filter_rows(&table, &SiteSelection::from_value("KSC"), PayloadRange::new(0.0, 10000.0));
    assert_eq!(ksc, vec![&table.records()[2]]);
}
