// Shared fixtures for classmerge integration tests
#![allow(dead_code)]

use classmerge::model::{ClassModel, Feature, FeatureId};
use proptest::prelude::*;

/// Random graph of 1..14 features with up to three edges of each kind per
/// method. Edges may point anywhere, including back at the method itself.
pub fn arb_model() -> impl Strategy<Value = ClassModel> {
    (1usize..14)
        .prop_flat_map(|n| {
            proptest::collection::vec(
                (
                    any::<bool>(),
                    proptest::collection::vec(0..n, 0..4),
                    proptest::collection::vec(0..n, 0..4),
                ),
                n,
            )
        })
        .prop_map(|specs| {
            let features = specs
                .into_iter()
                .enumerate()
                .map(|(i, (is_method, data, functional))| {
                    if is_method {
                        Feature::method(format!("m{}", i), to_ids(data), to_ids(functional))
                    } else {
                        Feature::attribute(format!("a{}", i))
                    }
                })
                .collect();
            ClassModel::new("random", features).expect("edges stay in range")
        })
}

fn to_ids(indices: Vec<usize>) -> Vec<FeatureId> {
    indices.into_iter().map(FeatureId).collect()
}

/// Sorted member names of every class, for order-insensitive comparisons.
pub fn grouping(model: &ClassModel) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = model
        .classes()
        .iter()
        .map(|class| {
            let mut names: Vec<String> = class
                .encapsulates
                .iter()
                .map(|id| model.feature(*id).name.clone())
                .collect();
            names.sort();
            names
        })
        .collect();
    groups.sort();
    groups
}
