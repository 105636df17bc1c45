//! Records output formatting for list command

use campus_core::catalog::{Catalog, CatalogEntity};
use campus_core::format::escape_quotes;
use campus_core::query::CatalogView;

use crate::commands::format::{entity_record, print_records_header};

/// Output in records format
pub fn output_records(catalog: &Catalog, view: &CatalogView<'_, CatalogEntity>) {
    let outcome = view.outcome();

    print_records_header(
        "list",
        &[
            ("catalog", catalog.kind.to_string()),
            ("sort", outcome.sort.to_string()),
            ("matched", outcome.matched().to_string()),
            ("total", outcome.total.to_string()),
        ],
    );

    match &outcome.groups {
        Some(groups) => {
            for group in groups {
                println!(
                    "G \"{}\" count={}",
                    escape_quotes(group.category),
                    group.items.len()
                );
                for entity in &group.items {
                    output_entity_record(catalog, view, entity);
                }
            }
        }
        None => {
            for entity in &outcome.items {
                output_entity_record(catalog, view, entity);
            }
        }
    }
}

fn output_entity_record(
    catalog: &Catalog,
    view: &CatalogView<'_, CatalogEntity>,
    entity: &CatalogEntity,
) {
    println!("{}", entity_record(entity));
    if view.expansion().is_expanded(&entity.id) {
        println!(
            "D {} \"{}\"",
            entity.id,
            escape_quotes(&catalog.render_description(entity))
        );
    }
}
