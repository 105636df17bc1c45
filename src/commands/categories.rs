//! `campus categories` command - list a catalog's facets with counts

use serde_json::json;

use campus_core::catalog::Catalog;
use campus_core::error::Result;
use campus_core::format::escape_quotes;

use crate::cli::{CategoriesArgs, Cli};
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format;

/// Execute the categories command
pub fn execute(cli: &Cli, args: &CategoriesArgs) -> Result<()> {
    let catalog = Catalog::builtin(args.catalog)?;
    let categories = catalog.category_counts();
    let topics = catalog.topic_counts();
    let tags = catalog.tags();

    output_by_format!(cli.format,
        json => {
            let counts = |rows: &[(&str, usize)]| {
                rows.iter()
                    .map(|(name, count)| json!({ "name": name, "count": count }))
                    .collect::<Vec<_>>()
            };
            print_json(&json!({
                "catalog": catalog.kind.as_str(),
                "categories": counts(categories.as_slice()),
                "topics": counts(topics.as_slice()),
                "tags": tags,
            }))
        },
        human => {
            if !cli.quiet {
                println!("{}", catalog.title);
                println!();
            }
            println!("Categories:");
            for (name, count) in &categories {
                println!("  {} ({})", name, count);
            }
            if catalog.kind.dimensions().topics {
                println!();
                println!("Topics:");
                for (name, count) in &topics {
                    println!("  {} ({})", name, count);
                }
            }
            if !tags.is_empty() {
                println!();
                println!(
                    "Tags: {}",
                    tags.iter().copied().collect::<Vec<_>>().join(", ")
                );
            }
        },
        records => {
            print_records_header("categories", &[("catalog", catalog.kind.to_string())]);
            for (name, count) in &categories {
                println!("C \"{}\" count={}", escape_quotes(name), count);
            }
            for (name, count) in &topics {
                println!("P \"{}\" count={}", escape_quotes(name), count);
            }
            for tag in &tags {
                println!("T {}", tag);
            }
        }
    )
}
