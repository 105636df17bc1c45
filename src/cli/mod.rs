//! CLI argument parsing for campus
//!
//! Supports global flags: --format, --quiet, --verbose, --user, --config-dir

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{CategoriesArgs, CompassArgs, FaqArgs, ListArgs, ShowArgs, WorksheetsArgs};
pub use campus_core::format::OutputFormat;
use parse::parse_format;

/// Campus - No-Code & AI student dashboard
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `campus_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Signed-in student (`id` or `id:email`)
    #[arg(long, global = true, env = "CAMPUS_USER")]
    pub user: Option<String>,

    /// Directory holding campus.toml
    #[arg(long, global = true, env = "CAMPUS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level campus commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a catalog with search, filters and sorting
    List(ListArgs),

    /// Show one catalog entry with its cross-references
    Show(ShowArgs),

    /// List a catalog's categories, topics and tags with counts
    Categories(CategoriesArgs),

    /// Frequently asked questions
    Faq(FaqArgs),

    /// Step-by-step program guide
    Guide,

    /// Worksheets, or one worksheet in full
    Worksheets(WorksheetsArgs),

    /// Premium member benefits (requires sign-in)
    Benefits,

    /// Ask the Brújula for content, explanations or a learning path
    Compass(CompassArgs),

    /// Check the built-in catalogs for consistency
    Validate,
}
