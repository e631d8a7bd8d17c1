//! Candidate scoring, best-merge selection and the merge step itself.
//!
//! Candidates are the unordered pairs `{i, j : i < j}` of class positions,
//! enumerated with `i` in the outer loop. When several pairs share the
//! greatest effect, the first one in that order wins, so sequential and
//! parallel scoring always select the same pair.

use rayon::prelude::*;

use crate::model::{Class, ClassId, ClassModel};

use super::effect::merge_effect;
use super::interaction::InteractionTable;

/// A scored pair of classes from the current partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeCandidate {
    pub first: ClassId,
    pub second: ClassId,
    pub effect: f64,
}

/// Every unordered class pair of a partition with `class_count` classes.
pub fn candidate_pairs(class_count: usize) -> impl Iterator<Item = (ClassId, ClassId)> {
    (0..class_count)
        .flat_map(move |i| (i + 1..class_count).map(move |j| (ClassId(i), ClassId(j))))
}

/// Score all candidate pairs, in enumeration order.
pub fn score_candidates(model: &ClassModel, parallel: bool) -> Vec<MergeCandidate> {
    let table = InteractionTable::build(model);
    let score = |(first, second): (ClassId, ClassId)| MergeCandidate {
        first,
        second,
        effect: merge_effect(&table, first, second),
    };

    if parallel {
        let pairs: Vec<_> = candidate_pairs(table.class_count()).collect();
        pairs.into_par_iter().map(score).collect()
    } else {
        candidate_pairs(table.class_count()).map(score).collect()
    }
}

/// The highest-scoring pair of the current partition, if any.
///
/// Returns `None` when fewer than two classes remain. The result is not
/// filtered by sign; callers decide whether the effect is worth merging.
pub fn select_best_merge(model: &ClassModel, parallel: bool) -> Option<MergeCandidate> {
    if model.class_count() < 2 {
        return None;
    }

    first_maximum(&score_candidates(model, parallel))
}

/// First candidate with the strictly greatest effect. NaN never wins.
fn first_maximum(candidates: &[MergeCandidate]) -> Option<MergeCandidate> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| !candidate.effect.is_nan())
        .fold(None, |best: Option<MergeCandidate>, candidate| match best {
            Some(current) if candidate.effect <= current.effect => Some(current),
            _ => Some(candidate),
        })
}

/// Replace classes `first` and `second` with one class owning both.
///
/// The remaining classes keep their relative order and the new class is
/// appended; its members are `first`'s followed by `second`'s.
///
/// # Panics
///
/// Panics if the two ids are equal or out of range.
pub fn merge_classes(
    model: &mut ClassModel,
    first: ClassId,
    second: ClassId,
    name: impl Into<String>,
) -> ClassId {
    assert_ne!(first, second, "cannot merge a class with itself");

    let classes = model.classes_mut();
    let (low, high) = if first < second {
        (first, second)
    } else {
        (second, first)
    };
    let high_class = classes.remove(high.index());
    let low_class = classes.remove(low.index());
    let (first_class, second_class) = if first < second {
        (low_class, high_class)
    } else {
        (high_class, low_class)
    };

    let mut encapsulates = first_class.encapsulates;
    encapsulates.extend(second_class.encapsulates);
    classes.push(Class::new(name, encapsulates));

    ClassId(classes.len() - 1)
}
