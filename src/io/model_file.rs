use std::fs;
use std::path::{Path, PathBuf};

use super::document::ModelDocument;
use crate::error::{Error, Result, ResultExt};
use crate::model::ClassModel;

/// Parse a model from its JSON text.
pub fn parse_model(json: &str) -> Result<ClassModel> {
    let document: ModelDocument = serde_json::from_str(json)?;
    document.into_model()
}

/// Render a model as pretty-printed JSON.
pub fn render_model(model: &ClassModel) -> Result<String> {
    let document = ModelDocument::from_model(model);
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn load_model(path: &Path) -> Result<ClassModel> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read model", path, e))?;
    parse_model(&contents).map_err(|e| match e {
        Error::MalformedGraph(message) => {
            Error::MalformedGraph(format!("{}: {}", path.display(), message))
        }
        other => other.with_context(format!("Failed to load {}", path.display())),
    })
}

pub fn save_model(model: &ClassModel, path: &Path) -> Result<()> {
    let json = render_model(model).context("Failed to render model")?;
    fs::write(path, json).map_err(|e| Error::file_system("Failed to write model", path, e))
}

/// Output path next to the input: `model.json` becomes `model.<suffix>.json`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    input.with_extension(format!("{}.json", suffix))
}
