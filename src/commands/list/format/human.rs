//! Human-readable output formatting for list command

use campus_core::catalog::{Catalog, CatalogEntity};
use campus_core::format::truncate_for_display;
use campus_core::query::CatalogView;

use crate::cli::Cli;
use crate::commands::format::detail_rows;

const SUMMARY_CHARS: usize = 72;

/// Output in human-readable format
pub fn output_human(cli: &Cli, catalog: &Catalog, view: &CatalogView<'_, CatalogEntity>) {
    let outcome = view.outcome();

    if !cli.quiet {
        println!(
            "{} ({} of {})",
            catalog.title,
            outcome.matched(),
            outcome.total
        );
        println!();
    }

    if outcome.total == 0 {
        println!("This catalog has no entries yet");
        return;
    }
    if outcome.is_filtered_empty() {
        println!("No entries match the current filters");
        return;
    }

    match &outcome.groups {
        Some(groups) => {
            for group in groups {
                println!("{} ({})", group.category, group.items.len());
                for entity in &group.items {
                    print_entity(catalog, view, entity, "  ");
                }
                println!();
            }
        }
        None => {
            for entity in &outcome.items {
                print_entity(catalog, view, entity, "");
            }
        }
    }
}

fn print_entity(
    catalog: &Catalog,
    view: &CatalogView<'_, CatalogEntity>,
    entity: &CatalogEntity,
    indent: &str,
) {
    let expanded = view.expansion().is_expanded(&entity.id);
    let marker = if expanded { "▾" } else { "▸" };
    let level = entity
        .difficulty
        .map(|d| format!(" · {}", d.label()))
        .unwrap_or_default();

    println!(
        "{}{} {} [{}]{}  ({})",
        indent, marker, entity.name, entity.category, level, entity.id
    );

    if expanded {
        println!("{}    {}", indent, catalog.render_description(entity));
        for (label, value) in detail_rows(catalog, entity) {
            println!("{}    {}: {}", indent, label, value);
        }
    } else {
        println!(
            "{}    {}",
            indent,
            truncate_for_display(&catalog.render_description(entity), SUMMARY_CHARS)
        );
    }
}
