//! Postbru binary entry point.

use clap::Parser;
use colored::Colorize;
use postbru::cli::{Cli, Commands};
use postbru::commands;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match &cli.command {
        Commands::Convert { input, output_dir } => {
            commands::execute_convert(input, output_dir.as_deref(), cli.verbose)
        }
        Commands::Batch {
            input_dir,
            output_dir,
            continue_on_error,
        } => commands::execute_batch(input_dir, output_dir, *continue_on_error, cli.verbose),
        Commands::Env { input, output_dir } => {
            commands::execute_env(input, output_dir, cli.verbose)
        }
    };

    if let Err(err) = result {
        eprintln!("{} {err}", "Error:".red().bold());
        std::process::exit(1);
    }
}
