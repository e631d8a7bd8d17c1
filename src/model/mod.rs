//! In-memory dependency graph of design elements.
//!
//! A [`ClassModel`] owns every [`Feature`] (method or attribute) and the
//! current partition of those features into [`Class`]es. Features are
//! immutable after construction; only class membership changes while the
//! optimizer runs.
//!
//! Construction validates the graph so the optimizer never sees a dangling
//! dependency edge:
//!
//! ```rust
//! use classmerge::model::{ClassModel, Feature, FeatureId};
//!
//! let model = ClassModel::new(
//!     "Class Model",
//!     vec![
//!         Feature::method("m1", vec![FeatureId(1)], vec![]),
//!         Feature::attribute("a1"),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(model.feature_count(), 2);
//! assert!(model.classes().is_empty());
//! ```

mod class;
mod feature;

pub use class::{Class, ClassId};
pub use feature::{Feature, FeatureId, FeatureKind};

use crate::error::{Error, Result};

/// Features plus their current grouping into classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    name: String,
    features: Vec<Feature>,
    classes: Vec<Class>,
}

impl ClassModel {
    /// Build a model with no classes.
    ///
    /// Fails with [`Error::MalformedGraph`] when a dependency edge points
    /// outside the feature set.
    pub fn new(name: impl Into<String>, features: Vec<Feature>) -> Result<Self> {
        validate_edges(&features)?;
        Ok(Self {
            name: name.into(),
            features,
            classes: Vec::new(),
        })
    }

    /// Attach an initial partition.
    ///
    /// An empty list leaves every feature unassigned. Otherwise the classes
    /// must cover every feature exactly once.
    pub fn with_classes(mut self, classes: Vec<Class>) -> Result<Self> {
        if !classes.is_empty() {
            check_partition(&self.features, &classes)?;
        }
        self.classes = classes;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn feature(&self, id: FeatureId) -> &Feature {
        &self.features[id.index()]
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn feature_ids(&self) -> impl Iterator<Item = FeatureId> + '_ {
        (0..self.features.len()).map(FeatureId)
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub(crate) fn classes_mut(&mut self) -> &mut Vec<Class> {
        &mut self.classes
    }

    /// Owning class of each feature, indexed by [`FeatureId`].
    ///
    /// `None` marks a feature no class encapsulates.
    pub fn owners(&self) -> Vec<Option<ClassId>> {
        let mut owners = vec![None; self.features.len()];
        for (index, class) in self.classes.iter().enumerate() {
            for feature in &class.encapsulates {
                owners[feature.index()] = Some(ClassId(index));
            }
        }
        owners
    }

    /// Check that every feature belongs to exactly one class.
    pub fn validate_partition(&self) -> Result<()> {
        check_partition(&self.features, &self.classes)
    }

    /// Every feature id across all classes, in partition order.
    pub fn encapsulated_features(&self) -> Vec<FeatureId> {
        self.classes
            .iter()
            .flat_map(|class| class.encapsulates.iter().copied())
            .collect()
    }
}

fn validate_edges(features: &[Feature]) -> Result<()> {
    let count = features.len();
    for feature in features {
        let dangling = feature
            .data_dependency()
            .iter()
            .chain(feature.functional_dependency())
            .find(|target| target.index() >= count);

        if let Some(target) = dangling {
            return Err(Error::malformed(format!(
                "feature '{}' depends on element #{} but the graph has {} elements",
                feature.name,
                target.index(),
                count
            )));
        }
    }
    Ok(())
}

fn check_partition(features: &[Feature], classes: &[Class]) -> Result<()> {
    let mut owner: Vec<Option<&str>> = vec![None; features.len()];

    for class in classes {
        for feature in &class.encapsulates {
            let slot = owner.get_mut(feature.index()).ok_or_else(|| {
                Error::malformed(format!(
                    "class '{}' encapsulates unknown element #{}",
                    class.name,
                    feature.index()
                ))
            })?;

            if let Some(previous) = slot {
                return Err(Error::malformed(format!(
                    "feature '{}' belongs to both '{}' and '{}'",
                    features[feature.index()].name,
                    previous,
                    class.name
                )));
            }
            *slot = Some(class.name.as_str());
        }
    }

    match owner.iter().position(Option::is_none) {
        Some(orphan) => Err(Error::malformed(format!(
            "feature '{}' belongs to no class",
            features[orphan].name
        ))),
        None => Ok(()),
    }
}
