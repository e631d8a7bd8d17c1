//! Serialized form of a class model.
//!
//! Features and classes refer to each other by name on disk. Converting a
//! [`ModelDocument`] into a [`ClassModel`] resolves every name and rejects
//! anything that would leave the graph inconsistent.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Class, ClassModel, Feature, FeatureId, FeatureKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKindDocument {
    Method,
    Attribute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDocument {
    pub kind: FeatureKindDocument,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_dependency: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functional_dependency: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDocument {
    pub name: String,
    #[serde(default)]
    pub encapsulates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDocument {
    pub name: String,
    #[serde(default)]
    pub features: Vec<FeatureDocument>,
    #[serde(default)]
    pub classes: Vec<ClassDocument>,
}

impl ModelDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn method(mut self, name: &str, data: &[&str], functional: &[&str]) -> Self {
        self.features.push(FeatureDocument {
            kind: FeatureKindDocument::Method,
            name: name.to_string(),
            data_dependency: to_owned_names(data),
            functional_dependency: to_owned_names(functional),
        });
        self
    }

    pub fn attribute(mut self, name: &str) -> Self {
        self.features.push(FeatureDocument {
            kind: FeatureKindDocument::Attribute,
            name: name.to_string(),
            data_dependency: Vec::new(),
            functional_dependency: Vec::new(),
        });
        self
    }

    pub fn class(mut self, name: &str, members: &[&str]) -> Self {
        self.classes.push(ClassDocument {
            name: name.to_string(),
            encapsulates: to_owned_names(members),
        });
        self
    }

    /// Resolve names and build a validated model.
    pub fn into_model(self) -> Result<ClassModel> {
        let index = index_feature_names(&self.features)?;
        let resolve = |owner: &str, target: &String| {
            index.get(target.as_str()).copied().ok_or_else(|| {
                Error::malformed(format!(
                    "'{}' references unknown element '{}'",
                    owner, target
                ))
            })
        };

        let mut features = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            let resolved = match feature.kind {
                FeatureKindDocument::Attribute => {
                    if !feature.data_dependency.is_empty()
                        || !feature.functional_dependency.is_empty()
                    {
                        return Err(Error::malformed(format!(
                            "attribute '{}' cannot declare dependencies",
                            feature.name
                        )));
                    }
                    Feature::attribute(feature.name.clone())
                }
                FeatureKindDocument::Method => Feature::method(
                    feature.name.clone(),
                    feature
                        .data_dependency
                        .iter()
                        .map(|target| resolve(feature.name.as_str(), target))
                        .collect::<Result<Vec<_>>>()?,
                    feature
                        .functional_dependency
                        .iter()
                        .map(|target| resolve(feature.name.as_str(), target))
                        .collect::<Result<Vec<_>>>()?,
                ),
            };
            features.push(resolved);
        }

        let classes = self
            .classes
            .iter()
            .map(|class| -> Result<Class> {
                let members = class
                    .encapsulates
                    .iter()
                    .map(|member| resolve(class.name.as_str(), member))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Class::new(class.name.clone(), members))
            })
            .collect::<Result<Vec<_>>>()?;

        ClassModel::new(self.name, features)?.with_classes(classes)
    }

    /// Snapshot a model, classes in partition order.
    pub fn from_model(model: &ClassModel) -> Self {
        let names = |ids: &[FeatureId]| -> Vec<String> {
            ids.iter().map(|id| model.feature(*id).name.clone()).collect()
        };

        let features = model
            .features()
            .iter()
            .map(|feature| FeatureDocument {
                kind: match feature.kind {
                    FeatureKind::Method { .. } => FeatureKindDocument::Method,
                    FeatureKind::Attribute => FeatureKindDocument::Attribute,
                },
                name: feature.name.clone(),
                data_dependency: names(feature.data_dependency()),
                functional_dependency: names(feature.functional_dependency()),
            })
            .collect();

        let classes = model
            .classes()
            .iter()
            .map(|class| ClassDocument {
                name: class.name.clone(),
                encapsulates: names(&class.encapsulates),
            })
            .collect();

        Self {
            name: model.name().to_string(),
            features,
            classes,
        }
    }
}

fn index_feature_names(features: &[FeatureDocument]) -> Result<HashMap<&str, FeatureId>> {
    let mut index = HashMap::with_capacity(features.len());
    for (position, feature) in features.iter().enumerate() {
        if index
            .insert(feature.name.as_str(), FeatureId(position))
            .is_some()
        {
            return Err(Error::malformed(format!(
                "duplicate element name '{}'",
                feature.name
            )));
        }
    }
    Ok(index)
}

fn to_owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_into_model_resolves_names() {
        let model = ModelDocument::new("model")
            .method("m1", &["a1"], &["m2"])
            .method("m2", &[], &[])
            .attribute("a1")
            .into_model()
            .unwrap();

        assert_eq!(model.feature_count(), 3);
        assert_eq!(model.feature(FeatureId(0)).data_dependency(), &[FeatureId(2)]);
        assert_eq!(
            model.feature(FeatureId(0)).functional_dependency(),
            &[FeatureId(1)]
        );
    }

    #[test]
    fn test_unknown_dependency_is_malformed() {
        let err = ModelDocument::new("model")
            .method("m1", &["ghost"], &[])
            .into_model()
            .unwrap_err();
        assert!(err.is_malformed_graph());
        assert!(err.to_string().contains("'ghost'"));
    }

    #[test]
    fn test_duplicate_names_are_malformed() {
        let err = ModelDocument::new("model")
            .attribute("a")
            .attribute("a")
            .into_model()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate element name 'a'"));
    }

    #[test]
    fn test_attribute_with_dependencies_is_malformed() {
        let mut document = ModelDocument::new("model").attribute("a").attribute("b");
        document.features[0].data_dependency.push("b".into());

        let err = document.into_model().unwrap_err();
        assert!(err.to_string().contains("attribute 'a'"));
    }

    #[test]
    fn test_class_members_must_partition_features() {
        let err = ModelDocument::new("model")
            .attribute("a")
            .attribute("b")
            .class("A", &["a"])
            .into_model()
            .unwrap_err();
        assert!(err.is_malformed_graph());
    }

    #[test]
    fn test_from_model_round_trips_document() {
        let document = ModelDocument::new("model")
            .method("m1", &["a1"], &[])
            .attribute("a1")
            .class("C1", &["a1", "m1"]);

        let model = document.clone().into_model().unwrap();
        assert_eq!(ModelDocument::from_model(&model), document);
    }
}
