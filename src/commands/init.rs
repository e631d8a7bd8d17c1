use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# Classmerge Configuration

[optimizer]
# Score candidate merges on all cores
parallel = true
# Initial classes are named <singleton_prefix><feature name>
singleton_prefix = "C"
# Merged classes are named <merged_prefix><merge number>
merged_prefix = "C"

[output]
model_name = "Optimized Class Model"
# model.json is written to model.<suffix>.json
suffix = "Output"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, ClassmergeConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, ClassmergeConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        init_config_in(temp.path(), false).unwrap();
        assert!(init_config_in(temp.path(), false).is_err());
        assert!(init_config_in(temp.path(), true).is_ok());
    }
}
