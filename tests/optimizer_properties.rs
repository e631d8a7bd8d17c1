//! Property-based tests for the greedy merge optimizer
//!
//! These tests verify invariants that should hold for all inputs:
//! - Every feature ends up in exactly one class
//! - Only strictly improving merges are performed
//! - A converged partition stays converged
//! - Runs are reproducible, with or without parallel scoring

mod common;

use classmerge::config::OptimizerConfig;
use classmerge::model::FeatureId;
use classmerge::optimizer::{select_best_merge, Optimizer};
use common::arb_model;
use proptest::prelude::*;

fn sequential() -> Optimizer {
    Optimizer::new(OptimizerConfig {
        parallel: false,
        ..OptimizerConfig::default()
    })
}

proptest! {
    /// Property: the final classes hold every feature exactly once
    #[test]
    fn prop_features_are_conserved(model in arb_model()) {
        let mut optimized = model.clone();
        sequential().optimize(&mut optimized);

        let mut members = optimized.encapsulated_features();
        members.sort();
        let expected: Vec<FeatureId> = model.feature_ids().collect();

        prop_assert_eq!(members, expected);
        prop_assert!(optimized.validate_partition().is_ok());
        prop_assert_eq!(optimized.features(), model.features());
    }

    /// Property: every performed merge had a strictly positive effect and
    /// removed exactly one class
    #[test]
    fn prop_merges_are_strictly_improving(model in arb_model()) {
        let mut optimized = model.clone();
        let report = sequential().optimize(&mut optimized);
        let n = model.feature_count();

        prop_assert!(report.merges.iter().all(|merge| merge.effect > 0.0));
        prop_assert!(report.merge_count() < n);
        prop_assert_eq!(report.initial_classes, n);
        prop_assert_eq!(report.final_classes, n - report.merge_count());
        prop_assert_eq!(optimized.class_count(), report.final_classes);

        for (index, merge) in report.merges.iter().enumerate() {
            prop_assert_eq!(merge.step, index + 1);
            prop_assert_eq!(&merge.merged, &format!("C{}", index + 1));
        }
    }

    /// Property: re-running on a converged partition performs no merge
    #[test]
    fn prop_converged_partition_is_a_fixed_point(model in arb_model()) {
        let optimizer = sequential();
        let mut optimized = model.clone();
        optimizer.optimize(&mut optimized);

        let best = select_best_merge(&optimized, false);
        prop_assert!(best.map_or(true, |candidate| candidate.effect <= 0.0));

        let snapshot = optimized.clone();
        let again = optimizer.converge(&mut optimized).unwrap();
        prop_assert_eq!(again.merge_count(), 0);
        prop_assert_eq!(optimized, snapshot);
    }

    /// Property: identical input yields an identical report, quality sums
    /// included, whether pairs are scored sequentially or in parallel
    #[test]
    fn prop_runs_are_reproducible(model in arb_model()) {
        let mut first = model.clone();
        let mut second = model.clone();
        let mut parallel = model.clone();

        let first_report = sequential().optimize(&mut first);
        let second_report = sequential().optimize(&mut second);
        let parallel_report = Optimizer::default().optimize(&mut parallel);

        prop_assert_eq!(&first_report, &second_report);
        prop_assert_eq!(&first_report, &parallel_report);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &parallel);
    }
}
