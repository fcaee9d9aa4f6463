//! bookshelf CLI
//!
//! Command-line interface for growing and checking the audiobook catalogs.

mod cli_types;
mod commands;
mod error;
mod logger;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ExpandArgs};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Expand(ExpandArgs::default()));

    let load_settings = || settings::load_settings(cli.config.as_deref(), cli.data_dir.clone());

    match command {
        Commands::Expand(args) => commands::expand::run_expand(
            &load_settings()?,
            args.batches,
            args.dry_run,
            args.report,
        ),
        Commands::Validate => commands::validate::run_validate(&load_settings()?),
        Commands::Stats { genres } => commands::stats::run_stats(&load_settings()?, genres),
        Commands::Slug { titles } => {
            commands::slug::run_slug(&titles);
            Ok(())
        }
    }
}
