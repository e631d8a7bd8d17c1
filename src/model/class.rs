use super::feature::FeatureId;

/// Position of a class in the model's current partition.
///
/// Positions shift whenever classes are merged, so a `ClassId` is only
/// meaningful for the partition it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

impl ClassId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named group of features. Member order is preserved on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    pub encapsulates: Vec<FeatureId>,
}

impl Class {
    pub fn new(name: impl Into<String>, encapsulates: Vec<FeatureId>) -> Self {
        Self {
            name: name.into(),
            encapsulates,
        }
    }

    pub fn singleton(name: impl Into<String>, feature: FeatureId) -> Self {
        Self::new(name, vec![feature])
    }
}
