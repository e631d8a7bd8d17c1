//! Greedy merge optimizer.
//!
//! Starting from one class per feature, the optimizer repeatedly merges the
//! pair of classes with the greatest [`effect`] and stops as soon as the
//! best available effect is no longer strictly positive.
//!
//! # Module Structure
//!
//! ```text
//! optimizer/
//! ├── mod.rs          # Optimizer, merge loop and report (this file)
//! ├── interaction.rs  # MAI / MMI counts per class pair
//! ├── effect.rs       # Merge effect formula
//! ├── merge.rs        # Candidate scoring, selection and merge step
//! └── quality.rs      # CRA-Index of a partition
//! ```
//!
//! # Usage
//!
//! ```rust
//! use classmerge::config::OptimizerConfig;
//! use classmerge::model::{ClassModel, Feature, FeatureId};
//! use classmerge::optimizer::Optimizer;
//!
//! let mut model = ClassModel::new(
//!     "Class Model",
//!     vec![
//!         Feature::method("m1", vec![FeatureId(1)], vec![]),
//!         Feature::attribute("a1"),
//!     ],
//! )
//! .unwrap();
//!
//! let report = Optimizer::new(OptimizerConfig::default()).optimize(&mut model);
//! assert_eq!(report.merges.len(), 1);
//! assert_eq!(model.classes()[0].name, "C1");
//! ```

pub mod effect;
pub mod interaction;
pub mod merge;
pub mod quality;

pub use effect::{merge_effect, EffectBreakdown, PairMetrics};
pub use interaction::{ClassProfile, Interaction, InteractionTable};
pub use merge::{
    candidate_pairs, merge_classes, score_candidates, select_best_merge, MergeCandidate,
};
pub use quality::{evaluate_partition, QualityMetrics};

use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::model::{Class, ClassModel};

/// One performed merge, in temporal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeEvent {
    /// 1-based merge number.
    pub step: usize,
    pub first: String,
    pub second: String,
    pub merged: String,
    pub effect: f64,
}

/// Outcome of one optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub initial_classes: usize,
    pub final_classes: usize,
    pub merges: Vec<MergeEvent>,
    pub initial_quality: QualityMetrics,
    pub final_quality: QualityMetrics,
}

impl OptimizationReport {
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }

    pub fn improvement(&self) -> f64 {
        self.final_quality.cra_index - self.initial_quality.cra_index
    }
}

/// Replace any existing classes with one singleton class per feature.
///
/// Singletons follow feature order and are named `prefix + feature name`.
pub fn seed_singleton_partition(model: &mut ClassModel, prefix: &str) {
    let classes: Vec<Class> = model
        .feature_ids()
        .map(|id| Class::singleton(format!("{}{}", prefix, model.feature(id).name), id))
        .collect();
    *model.classes_mut() = classes;
}

#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Seed the singleton partition and merge to a fixed point.
    pub fn optimize(&self, model: &mut ClassModel) -> OptimizationReport {
        seed_singleton_partition(model, &self.config.singleton_prefix);
        self.run_merge_loop(model)
    }

    /// Merge to a fixed point starting from the model's current classes.
    ///
    /// Fails with [`Error::MalformedGraph`](crate::error::Error::MalformedGraph)
    /// when the classes are not an exact partition of the features.
    pub fn converge(&self, model: &mut ClassModel) -> Result<OptimizationReport> {
        model.validate_partition()?;
        Ok(self.run_merge_loop(model))
    }

    fn run_merge_loop(&self, model: &mut ClassModel) -> OptimizationReport {
        let _span = info_span!("merge_loop", classes = model.class_count()).entered();

        let initial_classes = model.class_count();
        let initial_quality = evaluate_partition(model);
        let mut merges = Vec::new();

        while let Some(candidate) = select_best_merge(model, self.config.parallel) {
            if candidate.effect <= 0.0 {
                debug!(
                    best_effect = candidate.effect,
                    "No improving merge left with {} classes",
                    model.class_count()
                );
                break;
            }

            let first = model.class(candidate.first).name.clone();
            let second = model.class(candidate.second).name.clone();
            let merged = format!("{}{}", self.config.merged_prefix, merges.len() + 1);

            info!("Now merging {} and {}", first, second);
            debug!(effect = candidate.effect, merged = %merged, "merge selected");

            merge_classes(model, candidate.first, candidate.second, merged.clone());
            merges.push(MergeEvent {
                step: merges.len() + 1,
                first,
                second,
                merged,
                effect: candidate.effect,
            });
        }

        let final_quality = evaluate_partition(model);
        info!(
            merges = merges.len(),
            classes = model.class_count(),
            cra_index = final_quality.cra_index,
            "Optimization converged"
        );

        OptimizationReport {
            initial_classes,
            final_classes: model.class_count(),
            merges,
            initial_quality,
            final_quality,
        }
    }
}
