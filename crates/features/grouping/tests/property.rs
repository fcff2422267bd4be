use classkit_domain::roster::ColumnRoster;
use classkit_grouping::similarity::jaccard;
use classkit_grouping::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn topics() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-d]{1,2}", 0..5).prop_map(|t| t.join(","))
}

proptest! {
    #[test]
    fn plans_cover_population_evenly(population in 0usize..200, size in 1usize..20) {
        let plan = Sizing::group_size(size).plan(population).unwrap();

        prop_assert_eq!(plan.total(), population);
        if let (Some(max), Some(min)) = (plan.sizes().iter().max(), plan.sizes().iter().min()) {
            prop_assert!(max - min <= 1);
        }
    }

    #[test]
    fn consistent_sizing_never_fails(population in 1usize..200, size in 1usize..20) {
        let expected = population.div_ceil(size);
        prop_assert!(Sizing::teams(expected).with_group_size(size).plan(population).is_ok());

        let err = Sizing::teams(expected + 1).with_group_size(size).plan(population).unwrap_err();
        prop_assert_eq!(err.kind(), ConfigurationErrorKind::InconsistentPlan);
    }

    #[test]
    fn breakout_is_a_partition(count in 1usize..60, teams in 1usize..10, seed in any::<u64>()) {
        let names: Vec<String> = (0..count).map(|i| format!("s{i}")).collect();
        let groups = make_breakout_groups(&names, Sizing::teams(teams), Some(seed)).unwrap();

        prop_assert_eq!(groups.len(), teams.min(count));
        let seen: BTreeSet<&String> = groups.iter().flatten().collect();
        prop_assert_eq!(seen.len(), count);
        prop_assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), count);
    }

    #[test]
    fn jaccard_is_symmetric_and_bounded(left in topics(), right in topics()) {
        let delimiters = Delimiters::default();
        let (a, b) = (PreferenceSet::parse(&left, &delimiters), PreferenceSet::parse(&right, &delimiters));
        let score = jaccard(&a, &b);

        prop_assert!((0.0..=1.0).contains(&score));
        prop_assert!((score - jaccard(&b, &a)).abs() < f64::EPSILON);
        if !a.is_empty() {
            prop_assert!((jaccard(&a, &a) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn preference_groups_partition_and_repeat(prefs in proptest::collection::vec(topics(), 1..30), size in 1usize..6, seed in any::<u64>()) {
        let names: Vec<String> = (0..prefs.len()).map(|i| format!("s{i}")).collect();
        let roster = classkit_domain::roster::ColumnRoster::new()
            .with_column("name", names.clone())
            .with_column("preferences", prefs);
        let options = PreferenceGroupOptions::new(Sizing::group_size(size)).seed(seed);

        let groups = form_preference_groups(&roster, &options).unwrap();
        let seen: BTreeSet<&String> = groups.iter().flatten().collect();
        prop_assert_eq!(seen.len(), names.len());
        prop_assert_eq!(groups.len(), names.len().div_ceil(size));
        prop_assert_eq!(groups, form_preference_groups(&roster, &options).unwrap());
    }

    #[test]
    fn peer_reviews_cycle(count in 2usize..40, seed in any::<u64>()) {
        let names: Vec<String> = (0..count).map(|i| format!("t{i}")).collect();
        let pairs = match_peer_reviews(&names, Some(seed));

        prop_assert_eq!(pairs.len(), count);
        for i in 0..count {
            prop_assert_eq!(&pairs[i].reviewee, &pairs[(i + 1) % count].reviewer);
        }
    }
}

proptest! {
    #[test]
    fn cold_call_picks_distinct_eligible_names(
        excused in proptest::collection::vec(any::<bool>(), 1..30),
        sample_size in 1usize..40,
        seed in any::<u64>(),
    ) {
        let names: Vec<String> = (0..excused.len()).map(|i| format!("s{i}")).collect();
        let roster = ColumnRoster::new()
            .with_column("name", names.clone())
            .with_column("excused", excused.clone());
        let eligible: BTreeSet<&String> = names.iter().zip(&excused).filter(|(_, e)| !**e).map(|(n, _)| n).collect();

        let picked = cold_call_candidates(&roster, &ColdCallOptions::new().sample_size(sample_size).seed(seed)).unwrap();

        prop_assert_eq!(picked.len(), sample_size.min(eligible.len()));
        let distinct: BTreeSet<&String> = picked.iter().collect();
        prop_assert_eq!(distinct.len(), picked.len());
        prop_assert!(distinct.is_subset(&eligible));
    }
}
