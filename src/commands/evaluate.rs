use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::ReportFormat;
use crate::io::load_model;
use crate::optimizer::{evaluate_partition, QualityMetrics};

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutcome {
    pub input: PathBuf,
    pub features: usize,
    pub classes: usize,
    pub quality: QualityMetrics,
}

/// Score the partition stored in a model without changing it.
pub fn handle_evaluate(input: PathBuf, format: ReportFormat) -> Result<EvaluationOutcome> {
    let model = load_model(&input)
        .with_context(|| format!("Failed to load model from {}", input.display()))?;
    if !model.is_empty() && model.classes().is_empty() {
        anyhow::bail!(
            "{} has no classes to evaluate; run `classmerge optimize` first",
            input.display()
        );
    }

    let outcome = EvaluationOutcome {
        features: model.feature_count(),
        classes: model.class_count(),
        quality: evaluate_partition(&model),
        input,
    };

    match format {
        ReportFormat::Terminal => {
            println!(
                "{} ({} features in {} classes)",
                outcome.input.display().to_string().bold(),
                outcome.features,
                outcome.classes
            );
            println!("  Cohesion ratio: {:.4}", outcome.quality.cohesion_ratio);
            println!("  Coupling ratio: {:.4}", outcome.quality.coupling_ratio);
            println!(
                "  CRA-Index:      {}",
                format!("{:.4}", outcome.quality.cra_index).green().bold()
            );
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(outcome)
}
