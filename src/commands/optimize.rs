use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::ReportFormat;
use crate::config::{load_config, load_config_from, ClassmergeConfig};
use crate::io::{derive_output_path, load_model, save_model};
use crate::observability::{Phase, PhaseTimer, TimingReport};
use crate::optimizer::{OptimizationReport, Optimizer};

/// Everything the `optimize` command needs, already parsed from the CLI.
#[derive(Debug, Clone)]
pub struct OptimizeConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_parallel: bool,
    pub model_name: Option<String>,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizeOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub model_name: String,
    pub features: usize,
    pub report: OptimizationReport,
    pub timings: TimingReport,
}

pub fn handle_optimize(config: OptimizeConfig) -> Result<OptimizeOutcome> {
    let settings = resolve_settings(&config)?;
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&config.input, &settings.output.suffix));

    let mut timings = TimingReport::default();

    let timer = PhaseTimer::start(Phase::Loading);
    let mut model = load_model(&config.input)
        .with_context(|| format!("Failed to load model from {}", config.input.display()))?;
    timings.record(timer.finish());

    let timer = PhaseTimer::start(Phase::Optimization);
    let report = Optimizer::new(settings.optimizer.clone()).optimize(&mut model);
    timings.record(timer.finish());

    let timer = PhaseTimer::start(Phase::Serialization);
    model.set_name(settings.output.model_name.clone());
    save_model(&model, &output)
        .with_context(|| format!("Failed to write optimized model to {}", output.display()))?;
    timings.record(timer.finish());

    let outcome = OptimizeOutcome {
        input: config.input,
        output,
        model_name: settings.output.model_name,
        features: model.feature_count(),
        report,
        timings,
    };

    match config.format {
        ReportFormat::Terminal => print_summary(&outcome),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(outcome)
}

/// Config file first, then CLI overrides.
fn resolve_settings(config: &OptimizeConfig) -> Result<ClassmergeConfig> {
    let mut settings = match &config.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };

    if config.no_parallel {
        settings.optimizer.parallel = false;
    }
    if let Some(name) = &config.model_name {
        settings.output.model_name = name.clone();
    }

    Ok(settings)
}

fn print_summary(outcome: &OptimizeOutcome) {
    let report = &outcome.report;

    println!(
        "{} {} ({} features)",
        "Optimized".green().bold(),
        display(&outcome.input),
        outcome.features
    );
    println!(
        "  Merges:    {} ({} -> {} classes)",
        report.merge_count(),
        report.initial_classes,
        report.final_classes
    );
    println!(
        "  CRA-Index: {:.4} -> {} ({:+.4})",
        report.initial_quality.cra_index,
        format!("{:.4}", report.final_quality.cra_index).bold(),
        report.improvement()
    );
    for timing in &outcome.timings.phases {
        println!(
            "  {} took {}ms",
            timing.phase,
            timing.duration.as_millis()
        );
    }
    println!("  Total:     {}ms", outcome.timings.total().as_millis());
    println!("  Wrote {}", display(&outcome.output).cyan());
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
