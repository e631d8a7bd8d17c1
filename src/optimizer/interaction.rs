//! Per-partition interaction counts (MAI / MMI) and class sizes.
//!
//! Built in a single pass over every dependency edge so that scoring any
//! class pair afterwards is a constant-time lookup.

use std::collections::BTreeMap;

use crate::model::{ClassId, ClassModel};

/// Method and attribute counts of one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassProfile {
    pub methods: i64,
    pub attributes: i64,
}

/// Edge counts from the methods of one class into another (or itself).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Data dependency edges (MAI).
    pub data: u32,
    /// Functional dependency edges (MMI).
    pub functional: u32,
}

/// Sparse `(source class, target class) -> Interaction` table.
///
/// Entries are kept sorted by position so anything summed over them adds up
/// in the same order on every run.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    profiles: Vec<ClassProfile>,
    interactions: BTreeMap<(usize, usize), Interaction>,
}

impl InteractionTable {
    /// Count class sizes and cross-class edges of the current partition.
    ///
    /// Edges whose source or target is not owned by any class are skipped.
    pub fn build(model: &ClassModel) -> Self {
        let owners = model.owners();
        let mut profiles = vec![ClassProfile::default(); model.class_count()];
        let mut interactions: BTreeMap<(usize, usize), Interaction> = BTreeMap::new();

        for (index, class) in model.classes().iter().enumerate() {
            for &member in &class.encapsulates {
                let feature = model.feature(member);
                if feature.is_attribute() {
                    profiles[index].attributes += 1;
                    continue;
                }
                profiles[index].methods += 1;

                for target in feature.data_dependency() {
                    if let Some(owner) = owners[target.index()] {
                        interactions.entry((index, owner.index())).or_default().data += 1;
                    }
                }
                for target in feature.functional_dependency() {
                    if let Some(owner) = owners[target.index()] {
                        interactions
                            .entry((index, owner.index()))
                            .or_default()
                            .functional += 1;
                    }
                }
            }
        }

        Self {
            profiles,
            interactions,
        }
    }

    pub fn class_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn profile(&self, class: ClassId) -> ClassProfile {
        self.profiles[class.index()]
    }

    /// Interaction from the methods of `from` into the features of `to`.
    pub fn between(&self, from: ClassId, to: ClassId) -> Interaction {
        self.interactions
            .get(&(from.index(), to.index()))
            .copied()
            .unwrap_or_default()
    }

    /// MAI(from, to)
    pub fn mai(&self, from: ClassId, to: ClassId) -> u32 {
        self.between(from, to).data
    }

    /// MMI(from, to)
    pub fn mmi(&self, from: ClassId, to: ClassId) -> u32 {
        self.between(from, to).functional
    }

    /// Every non-zero entry, ordered by `(from, to)`.
    pub fn entries(&self) -> impl Iterator<Item = (ClassId, ClassId, Interaction)> + '_ {
        self.interactions
            .iter()
            .map(|(&(from, to), &interaction)| (ClassId(from), ClassId(to), interaction))
    }
}
