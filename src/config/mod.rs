//! Configuration loaded from `.classmerge.toml`.
//!
//! The file is searched for in the working directory and up to nine of its
//! ancestors; the first one found wins. Missing sections and keys take
//! their defaults, and an invalid section is replaced by its defaults with
//! a warning. Command line flags override whatever the file sets.

mod core;
mod loader;

pub use self::core::{
    default_merged_prefix, default_model_name, default_output_suffix, default_parallel,
    default_singleton_prefix, ClassmergeConfig, OptimizerConfig, OutputConfig,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
