//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Expand and check the audiobook catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding children-catalog.json and adult-catalog.json
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to ./bookshelf.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Runs `expand` with defaults when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Merge candidate batches into the catalogs (the default command)
    Expand(ExpandArgs),

    /// Check both catalogs for duplicate slugs and malformed entries
    Validate,

    /// Show collection sizes, target progress, and common genres
    Stats {
        /// Number of genres to list
        #[arg(long, default_value_t = 10)]
        genres: usize,
    },

    /// Print the slug each title normalizes to
    Slug {
        /// Titles to normalize
        #[arg(required = true)]
        titles: Vec<String>,
    },
}

#[derive(Args, Default)]
pub(crate) struct ExpandArgs {
    /// Batch files to merge, in order (defaults to every file in the batches directory)
    pub batches: Vec<PathBuf>,

    /// Show what would be added without writing the catalogs
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Write a per-candidate merge report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
