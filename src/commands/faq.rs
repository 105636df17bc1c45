//! `campus faq` command - frequently asked questions, grouped by category

use serde_json::json;

use campus_core::content::Content;
use campus_core::error::Result;
use campus_core::format::escape_quotes;
use campus_core::query::SortMode;

use crate::cli::{Cli, FaqArgs};
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format;

/// Execute the faq command
pub fn execute(cli: &Cli, args: &FaqArgs) -> Result<()> {
    let content = Content::builtin()?;
    let mut view = content.faq_view();
    view.set_sort(SortMode::Category);

    if let Some(search) = &args.search {
        view.set_search(search);
    }
    if let Some(category) = &args.category {
        view.set_category(content.resolve_faq_category(category)?)?;
    }

    let outcome = view.outcome();
    let groups = outcome.groups.as_deref().unwrap_or_default();

    output_by_format!(cli.format,
        json => {
            let groups: Vec<_> = groups
                .iter()
                .map(|g| json!({ "category": g.category, "entries": g.items }))
                .collect();
            print_json(&json!({
                "total": outcome.total,
                "matched": outcome.matched(),
                "groups": groups,
            }))
        },
        human => {
            if outcome.is_filtered_empty() {
                println!("No questions match your search");
            }
            for group in groups {
                println!("{}", group.category);
                for entry in &group.items {
                    println!("  ? {}", entry.question);
                    println!("    {}", entry.answer);
                }
                println!();
            }
        },
        records => {
            print_records_header(
                "faq",
                &[
                    ("matched", outcome.matched().to_string()),
                    ("total", outcome.total.to_string()),
                ],
            );
            for group in groups {
                println!(
                    "G \"{}\" count={}",
                    escape_quotes(group.category),
                    group.items.len()
                );
                for entry in &group.items {
                    println!(
                        "Q {} \"{}\" \"{}\"",
                        entry.id,
                        escape_quotes(&entry.question),
                        escape_quotes(&entry.answer)
                    );
                }
            }
        }
    )
}
