//! JSON output formatting for list command

use serde_json::json;

use campus_core::catalog::{Catalog, CatalogEntity};
use campus_core::error::Result;
use campus_core::query::CatalogView;

use crate::commands::format::{entity_json, print_json};

/// Output in JSON format
pub fn output_json(catalog: &Catalog, view: &CatalogView<'_, CatalogEntity>) -> Result<()> {
    let outcome = view.outcome();
    let selection = view.selection();

    let items = outcome
        .items
        .iter()
        .map(|entity| entity_json(catalog, entity))
        .collect::<Result<Vec<_>>>()?;

    let mut output = json!({
        "catalog": catalog.kind.as_str(),
        "title": catalog.title,
        "total": outcome.total,
        "matched": outcome.matched(),
        "sort": outcome.sort,
        "filters": {
            "search": selection.search(),
            "category": selection.category().to_string(),
            "tags": selection.tags(),
            "topics": selection.topics(),
            "difficulty": selection.difficulty().map(|d| d.level()),
        },
        "expanded": view.expansion().expanded_id(),
        "items": items,
    });

    if let Some(groups) = &outcome.groups {
        let groups: Vec<_> = groups
            .iter()
            .map(|g| {
                json!({
                    "category": g.category,
                    "ids": g.items.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();
        if let Some(obj) = output.as_object_mut() {
            obj.insert("groups".to_string(), json!(groups));
        }
    }

    print_json(&output)
}
