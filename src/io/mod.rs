//! Reading and writing model documents.
//!
//! Models are stored as JSON. Loading validates the graph, so a model that
//! reaches the optimizer never has dangling edges or overlapping classes.

pub mod document;
mod model_file;

pub use document::{ClassDocument, FeatureDocument, FeatureKindDocument, ModelDocument};
pub use model_file::{derive_output_path, load_model, parse_model, render_model, save_model};
