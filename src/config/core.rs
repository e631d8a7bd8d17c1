use serde::{Deserialize, Serialize};

pub fn default_parallel() -> bool {
    true
}

pub fn default_singleton_prefix() -> String {
    "C".to_string()
}

pub fn default_merged_prefix() -> String {
    "C".to_string()
}

pub fn default_model_name() -> String {
    "Optimized Class Model".to_string()
}

pub fn default_output_suffix() -> String {
    "Output".to_string()
}

/// Root configuration structure for classmerge
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClassmergeConfig {
    /// Merge loop configuration
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Result model configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings read by the greedy merge loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizerConfig {
    /// Score candidate pairs on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Prefix of the initial one-feature classes
    #[serde(default = "default_singleton_prefix")]
    pub singleton_prefix: String,

    /// Prefix of merged classes, followed by the merge number
    #[serde(default = "default_merged_prefix")]
    pub merged_prefix: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            singleton_prefix: default_singleton_prefix(),
            merged_prefix: default_merged_prefix(),
        }
    }
}

impl OptimizerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.merged_prefix.is_empty() {
            return Err("optimizer.merged_prefix must not be empty".to_string());
        }
        Ok(())
    }
}

/// How the optimized model is named and where it is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Name given to the optimized model
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Inserted before the extension of the derived output path
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            suffix: default_output_suffix(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.suffix.is_empty() {
            return Err("output.suffix must not be empty".to_string());
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(format!(
                "output.suffix '{}' must not contain path separators",
                self.suffix
            ));
        }
        Ok(())
    }
}
