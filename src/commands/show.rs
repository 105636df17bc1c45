//! `campus show` command - open one catalog entry in full

use serde_json::json;
use tracing::debug;

use campus_core::catalog::Catalog;
use campus_core::error::Result;
use campus_core::expansion::{Expansion, ScrollRequest};

use crate::cli::{Cli, ShowArgs};
use crate::commands::format::{
    detail_rows, entity_json, entity_record, print_json, print_records_header,
};
use crate::output_by_format;

/// Execute the show command
pub fn execute(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let catalog = Catalog::builtin(args.catalog)?;
    let entity = catalog.require(&args.id)?;

    let mut view = catalog.view();
    let linked = catalog.linked_entities(entity);

    let scroll = focus_and_render(view.expansion_mut(), &entity.id, |_| {
        output_by_format!(cli.format,
            json => {
                let mut value = entity_json(catalog, entity)?;
                if let Some(obj) = value.as_object_mut() {
                    obj.insert("catalog".to_string(), json!(catalog.kind.as_str()));
                    obj.insert(
                        "see_also".to_string(),
                        json!(linked.iter().map(|e| e.id.as_str()).collect::<Vec<_>>()),
                    );
                }
                print_json(&value)
            },
            human => {
                println!("{}", entity.name);
                if !cli.quiet {
                    println!("{} · {}", catalog.title, entity.category);
                }
                println!();
                println!("{}", catalog.render_description(entity));
                println!();
                for (label, value) in detail_rows(catalog, entity) {
                    println!("{}: {}", label, value);
                }
                if !linked.is_empty() {
                    println!();
                    println!("See also:");
                    for other in &linked {
                        println!("  - {} ({})", other.name, other.id);
                    }
                }
            },
            records => {
                print_records_header(
                    "show",
                    &[("catalog", catalog.kind.to_string()), ("id", entity.id.clone())],
                );
                println!("{}", entity_record(entity));
                println!(
                    "D {} \"{}\"",
                    entity.id,
                    campus_core::format::escape_quotes(&catalog.render_description(entity))
                );
                for other in &linked {
                    println!("L {} {}", entity.id, other.id);
                }
            }
        )
    })?;
    if let Some(scroll) = scroll {
        debug!(target = %scroll.target, "scroll_to_entry");
    }
    Ok(())
}

/// Focus `id`, render, then hand back the scroll request left by the focus
fn focus_and_render<F>(
    expansion: &mut Expansion,
    id: &str,
    render: F,
) -> Result<Option<ScrollRequest>>
where
    F: FnOnce(&Expansion) -> Result<()>,
{
    expansion.focus(id);
    render(expansion)?;
    Ok(expansion.take_scroll_request())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::error::CampusError;

    #[test]
    fn test_scroll_taken_after_render() {
        let mut expansion = Expansion::new();
        let scroll = focus_and_render(&mut expansion, "api", |exp| {
            assert!(exp.is_expanded("api"));
            assert!(exp.has_pending_scroll());
            Ok(())
        })
        .unwrap();
        assert_eq!(scroll.map(|s| s.target), Some("api".to_string()));
        assert!(!expansion.has_pending_scroll());
    }

    #[test]
    fn test_failed_render_keeps_scroll_pending() {
        let mut expansion = Expansion::new();
        let result = focus_and_render(&mut expansion, "api", |_| {
            Err(CampusError::Other("broken pipe".to_string()))
        });
        assert!(result.is_err());
        assert!(expansion.has_pending_scroll());
    }
}
