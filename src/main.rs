use anyhow::Result;
use clap::Parser;
use classmerge::cli::{Cli, Commands};
use classmerge::commands::{self, OptimizeConfig};
use classmerge::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Optimize {
            input,
            output,
            config,
            no_parallel,
            model_name,
            format,
        } => {
            commands::handle_optimize(OptimizeConfig {
                input,
                output,
                config,
                no_parallel,
                model_name,
                format,
            })?;
        }
        Commands::Evaluate { input, format } => {
            commands::handle_evaluate(input, format)?;
        }
        Commands::Init { force } => commands::init::init_config(force)?,
    }

    Ok(())
}
