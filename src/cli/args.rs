//! Command argument structures

use clap::Args;

use campus_core::catalog::{CatalogKind, Difficulty};
use campus_core::compass::CompassMode;
use campus_core::query::SortMode;

use crate::cli::parse::{parse_catalog, parse_compass_mode, parse_difficulty, parse_sort};

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Catalog to browse (glossary, resources, nocode-tools, support-tools)
    #[arg(value_parser = parse_catalog)]
    pub catalog: CatalogKind,

    /// Case-insensitive text search over name, description, tags and author
    #[arg(long, short)]
    pub search: Option<String>,

    /// Category to show (`all` for every category)
    #[arg(long, short)]
    pub category: Option<String>,

    /// Tag filter (repeatable; entries with any of the tags match)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Topic filter, resources only (repeatable; any topic matches)
    #[arg(long, action = clap::ArgAction::Append)]
    pub topic: Vec<String>,

    /// Difficulty level (1-3 or principiante, intermedio, avanzado)
    #[arg(long, short, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Sort order (name, name-desc, category)
    #[arg(long, default_value = "name", value_parser = parse_sort)]
    pub sort: SortMode,

    /// Expand one entry inline
    #[arg(long, short)]
    pub expand: Option<String>,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Catalog holding the entry
    #[arg(value_parser = parse_catalog)]
    pub catalog: CatalogKind,

    /// Entry id
    pub id: String,
}

/// Arguments for the categories command.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Catalog to summarize
    #[arg(value_parser = parse_catalog)]
    pub catalog: CatalogKind,
}

/// Arguments for the faq command.
#[derive(Args, Debug)]
pub struct FaqArgs {
    /// Text search over questions and answers
    #[arg(long, short)]
    pub search: Option<String>,

    /// FAQ category (`all` for every category)
    #[arg(long, short)]
    pub category: Option<String>,
}

/// Arguments for the worksheets command.
#[derive(Args, Debug)]
pub struct WorksheetsArgs {
    /// Worksheet to print in full
    pub id: Option<String>,
}

/// Arguments for the compass command.
#[derive(Args, Debug)]
pub struct CompassArgs {
    /// Question for the Brújula
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// What to ask for (search, explain, path)
    #[arg(long, short, default_value = "search", value_parser = parse_compass_mode)]
    pub mode: CompassMode,

    /// Your own Gemini API key, used instead of the shared one
    #[arg(long)]
    pub api_key: Option<String>,
}

impl CompassArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
