//! Shared output formatting helpers for commands

use serde::Serialize;
use serde_json::{json, Value};

use campus_core::catalog::{Catalog, CatalogEntity, Details};
use campus_core::error::Result;
use campus_core::format::{escape_quotes, records_list};

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the records header line: `H campus=1 records=1 mode=<mode> k=v...`
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    let mut line = format!("H campus=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    println!("{}", line);
}

/// Entity as JSON, with cross-references resolved in `description_text`
pub fn entity_json(catalog: &Catalog, entity: &CatalogEntity) -> Result<Value> {
    let mut value = serde_json::to_value(entity)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "description_text".to_string(),
            json!(catalog.render_description(entity)),
        );
    }
    Ok(value)
}

/// One-line records form of an entity
pub fn entity_record(entity: &CatalogEntity) -> String {
    format!(
        "E {} \"{}\" category=\"{}\" tags={} topics={} difficulty={}",
        entity.id,
        escape_quotes(&entity.name),
        escape_quotes(&entity.category),
        records_list(&entity.tags),
        records_list(&entity.topics),
        entity
            .difficulty
            .map_or_else(|| "-".to_string(), |d| d.level().to_string())
    )
}

/// Label/value rows describing an entity's catalog-specific details
pub fn detail_rows(catalog: &Catalog, entity: &CatalogEntity) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(author) = &entity.author {
        rows.push(("Autor", author.clone()));
    }
    if let Some(difficulty) = entity.difficulty {
        rows.push(("Nivel", difficulty.label().to_string()));
    }
    if !entity.tags.is_empty() {
        rows.push(("Etiquetas", entity.tags.join(", ")));
    }
    if !entity.topics.is_empty() {
        rows.push(("Temas", entity.topics.join(", ")));
    }

    match &entity.details {
        Details::Plain => {}
        Details::Term { example, related } => {
            if let Some(example) = example {
                rows.push(("Ejemplo", example.clone()));
            }
            if !related.is_empty() {
                let names: Vec<&str> = related
                    .iter()
                    .map(|id| catalog.get(id).map_or(id.as_str(), |e| e.name.as_str()))
                    .collect();
                rows.push(("Relacionados", names.join(", ")));
            }
        }
        Details::Resource {
            url,
            format,
            duration_minutes,
            language,
        } => {
            rows.push(("Formato", format.label().to_string()));
            if let Some(minutes) = duration_minutes {
                rows.push(("Duración", format!("{} min", minutes)));
            }
            rows.push(("Idioma", language.clone()));
            rows.push(("Enlace", url.clone()));
        }
        Details::Tool {
            url,
            pricing,
            use_cases,
            configuration,
        } => {
            rows.push(("Precio", pricing.label().to_string()));
            if !use_cases.is_empty() {
                rows.push(("Usos", use_cases.join(", ")));
            }
            if let Some(configuration) = configuration {
                rows.push(("Configuración", configuration.clone()));
            }
            rows.push(("Enlace", url.clone()));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::catalog::CatalogKind;

    #[test]
    fn test_entity_record_line() {
        let catalog = Catalog::builtin(CatalogKind::Glossary).unwrap();
        let api = catalog.require("api").unwrap();
        assert_eq!(
            entity_record(api),
            "E api \"API\" category=\"Fundamentos\" tags=básico,destacado topics=- difficulty=1"
        );
    }

    #[test]
    fn test_detail_rows_resolve_related_names() {
        let catalog = Catalog::builtin(CatalogKind::Glossary).unwrap();
        let api = catalog.require("api").unwrap();
        let rows = detail_rows(catalog, api);
        assert!(rows.contains(&("Relacionados", "Webhook, JSON".to_string())));
    }

    #[test]
    fn test_entity_json_has_rendered_description() {
        let catalog = Catalog::builtin(CatalogKind::Glossary).unwrap();
        let api = catalog.require("api").unwrap();
        let value = entity_json(catalog, api).unwrap();
        assert_eq!(value["details"]["kind"], "term");
        assert!(value["description_text"]
            .as_str()
            .unwrap()
            .contains("Automatización"));
    }
}
