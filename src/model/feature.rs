//! Design elements: methods and attributes.

/// Stable index of a feature within its [`ClassModel`](super::ClassModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(pub usize);

impl FeatureId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a feature is, together with the edges only methods carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureKind {
    Method {
        /// Elements the method reads or writes.
        data_dependency: Vec<FeatureId>,
        /// Elements the method calls.
        functional_dependency: Vec<FeatureId>,
    },
    Attribute,
}

/// A method or attribute. Immutable once the model is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub kind: FeatureKind,
}

impl Feature {
    /// Create a method. Duplicate edges collapse, first occurrence wins.
    pub fn method(
        name: impl Into<String>,
        data_dependency: Vec<FeatureId>,
        functional_dependency: Vec<FeatureId>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Method {
                data_dependency: dedup_preserving_order(data_dependency),
                functional_dependency: dedup_preserving_order(functional_dependency),
            },
        }
    }

    pub fn attribute(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Attribute,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, FeatureKind::Method { .. })
    }

    pub fn is_attribute(&self) -> bool {
        matches!(self.kind, FeatureKind::Attribute)
    }

    /// Data dependency targets; empty for attributes.
    pub fn data_dependency(&self) -> &[FeatureId] {
        match &self.kind {
            FeatureKind::Method {
                data_dependency, ..
            } => data_dependency,
            FeatureKind::Attribute => &[],
        }
    }

    /// Functional dependency targets; empty for attributes.
    pub fn functional_dependency(&self) -> &[FeatureId] {
        match &self.kind {
            FeatureKind::Method {
                functional_dependency,
                ..
            } => functional_dependency,
            FeatureKind::Attribute => &[],
        }
    }
}

fn dedup_preserving_order(ids: Vec<FeatureId>) -> Vec<FeatureId> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
