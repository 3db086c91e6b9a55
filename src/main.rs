use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use price_breakdown::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    match args.get_command() {
        cli::Commands::Compute(compute) => {
            let cfg = config::load_config(&args.config)?;
            init_tracing(&cfg.logging);
            commands::compute::execute(&cfg, &compute.to_input(), compute.json)?;
        }
        cli::Commands::File { path, json } => {
            let cfg = config::load_config(&args.config)?;
            init_tracing(&cfg.logging);
            commands::compute::execute_file(&cfg, &path, json)?;
        }
        cli::Commands::Config { action } => {
            // Config may be the thing that is broken; log with defaults
            init_tracing(&config::LoggingConfig::default());
            match action {
                cli::ConfigCommands::Show => commands::config::show(&args.config)?,
                cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
            }
        }
        cli::Commands::Version => {
            println!("Price Breakdown v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
