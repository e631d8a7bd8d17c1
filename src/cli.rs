use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human readable summary
    Terminal,
    /// Machine readable JSON report on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "classmerge")]
#[command(about = "Greedy cohesion/coupling driven class restructuring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regroup all features of a model into optimized classes
    Optimize {
        /// Model document to optimize
        input: PathBuf,

        /// Output file (defaults to <input>.Output.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .classmerge.toml discovery)
        #[arg(short, long, env = "CLASSMERGE_CONFIG")]
        config: Option<PathBuf>,

        /// Score candidate merges on a single thread
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Name given to the optimized model
        #[arg(long)]
        model_name: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,
    },

    /// Report the CRA-Index of a model's existing classes
    Evaluate {
        /// Model document with a complete class partition
        input: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,
    },

    /// Write a default .classmerge.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
