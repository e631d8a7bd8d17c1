//! CRA-Index of a partition: cohesion ratio minus coupling ratio.
//!
//! ```text
//! cohesion = Σi  MAI(i,i)/(Mi·Ai) + MMI(i,i)/(Mi·(Mi-1))
//! coupling = Σi≠j MAI(i,j)/(Mi·Aj) + MMI(i,j)/(Mi·(Mj-1))
//! ```
//!
//! Unlike the merge effect, a term whose denominator is not positive
//! contributes nothing instead of being floored.

use serde::Serialize;

use crate::model::ClassModel;

use super::interaction::InteractionTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub cohesion_ratio: f64,
    pub coupling_ratio: f64,
    pub cra_index: f64,
}

/// Evaluate the model's current partition.
pub fn evaluate_partition(model: &ClassModel) -> QualityMetrics {
    let table = InteractionTable::build(model);
    let mut cohesion_ratio = 0.0;
    let mut coupling_ratio = 0.0;

    for (from, to, interaction) in table.entries() {
        let source = table.profile(from);
        let target = table.profile(to);
        let term = ratio(interaction.data, source.methods * target.attributes)
            + ratio(interaction.functional, source.methods * (target.methods - 1));

        if from == to {
            cohesion_ratio += term;
        } else {
            coupling_ratio += term;
        }
    }

    QualityMetrics {
        cohesion_ratio,
        coupling_ratio,
        cra_index: cohesion_ratio - coupling_ratio,
    }
}

fn ratio(count: u32, denominator: i64) -> f64 {
    if denominator > 0 {
        f64::from(count) / denominator as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::Interaction;
    use crate::model::{Class, ClassId, Feature, FeatureId};

    fn model_with(classes: Vec<Class>) -> ClassModel {
        ClassModel::new(
            "model",
            vec![
                Feature::method("m1", vec![FeatureId(1)], vec![FeatureId(2)]),
                Feature::attribute("a1"),
                Feature::method("m2", vec![FeatureId(1)], vec![]),
            ],
        )
        .unwrap()
        .with_classes(classes)
        .unwrap()
    }

    #[test]
    fn test_single_class_is_pure_cohesion() {
        let model = model_with(vec![Class::new(
            "C",
            vec![FeatureId(0), FeatureId(1), FeatureId(2)],
        )]);
        let metrics = evaluate_partition(&model);

        // MAI = 2 over 2·1, MMI = 1 over 2·1
        assert_eq!(metrics.cohesion_ratio, 1.5);
        assert_eq!(metrics.coupling_ratio, 0.0);
        assert_eq!(metrics.cra_index, 1.5);
    }

    #[test]
    fn test_singletons_are_pure_coupling() {
        let model = model_with(vec![
            Class::singleton("Cm1", FeatureId(0)),
            Class::singleton("Ca1", FeatureId(1)),
            Class::singleton("Cm2", FeatureId(2)),
        ]);
        let metrics = evaluate_partition(&model);

        // m1->a1 and m2->a1 count 1 each; m1->m2 has Mi·(Mj-1) = 0 and is dropped
        assert_eq!(metrics.cohesion_ratio, 0.0);
        assert_eq!(metrics.coupling_ratio, 2.0);
        assert_eq!(metrics.cra_index, -2.0);
    }

    /// Twelve features in three classes of uneven size, so most ratios
    /// have denominators like 3 or 6 and round when added.
    fn uneven_model() -> ClassModel {
        let features = (0..12)
            .map(|i| {
                if i % 4 == 3 {
                    Feature::attribute(format!("a{}", i))
                } else {
                    Feature::method(
                        format!("m{}", i),
                        vec![FeatureId((i + 3) % 12), FeatureId((i * 7 + 11) % 12)],
                        vec![FeatureId((i + 5) % 12), FeatureId((i + 1) % 12)],
                    )
                }
            })
            .collect();
        let group = |range: std::ops::Range<usize>| range.map(FeatureId).collect::<Vec<_>>();

        ClassModel::new("model", features)
            .unwrap()
            .with_classes(vec![
                Class::new("A", group(0..3)),
                Class::new("B", group(3..7)),
                Class::new("C", group(7..12)),
            ])
            .unwrap()
    }

    #[test]
    fn test_repeated_evaluation_is_bit_identical() {
        let model = uneven_model();
        let first = evaluate_partition(&model);

        for _ in 0..20 {
            let again = evaluate_partition(&model);
            assert_eq!(again.cohesion_ratio.to_bits(), first.cohesion_ratio.to_bits());
            assert_eq!(again.coupling_ratio.to_bits(), first.coupling_ratio.to_bits());
            assert_eq!(again.cra_index.to_bits(), first.cra_index.to_bits());
        }
    }

    #[test]
    fn test_sums_in_class_position_order() {
        let model = uneven_model();
        let table = InteractionTable::build(&model);
        let classes = table.class_count();

        let mut cohesion = 0.0;
        let mut coupling = 0.0;
        for from in (0..classes).map(ClassId) {
            for to in (0..classes).map(ClassId) {
                let interaction = table.between(from, to);
                if interaction == Interaction::default() {
                    continue;
                }
                let source = table.profile(from);
                let target = table.profile(to);
                let term = ratio(interaction.data, source.methods * target.attributes)
                    + ratio(interaction.functional, source.methods * (target.methods - 1));
                if from == to {
                    cohesion += term;
                } else {
                    coupling += term;
                }
            }
        }

        let metrics = evaluate_partition(&model);
        assert_eq!(metrics.cohesion_ratio.to_bits(), f64::to_bits(cohesion));
        assert_eq!(metrics.coupling_ratio.to_bits(), f64::to_bits(coupling));
        assert!(metrics.coupling_ratio > 0.0);
    }

    #[test]
    fn test_empty_model() {
        let model = ClassModel::new("model", vec![]).unwrap();
        assert_eq!(evaluate_partition(&model), QualityMetrics::default());
    }
}
