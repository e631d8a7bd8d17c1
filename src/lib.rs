//! Greedy class responsibility assignment.
//!
//! Regroups the methods and attributes of a class model into new classes by
//! repeatedly merging the pair of classes whose merge most improves
//! cohesion and removes coupling, until no merge improves the design.
//!
//! ```rust
//! use classmerge::io::ModelDocument;
//! use classmerge::optimizer::Optimizer;
//!
//! let mut model = ModelDocument::new("Class Model")
//!     .method("deposit", &["balance"], &[])
//!     .attribute("balance")
//!     .method("render", &["template"], &[])
//!     .attribute("template")
//!     .into_model()
//!     .unwrap();
//!
//! let report = Optimizer::default().optimize(&mut model);
//! assert_eq!(report.final_classes, 2);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod observability;
pub mod optimizer;

pub use crate::error::{Error, Result};
pub use crate::model::{Class, ClassId, ClassModel, Feature, FeatureId, FeatureKind};
pub use crate::optimizer::{
    evaluate_partition, select_best_merge, MergeCandidate, MergeEvent, OptimizationReport,
    Optimizer, QualityMetrics,
};
