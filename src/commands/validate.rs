//! `campus validate` command - check the built-in catalogs for consistency

use serde_json::json;

use campus_core::catalog::validate::{validate, ValidationIssue};
use campus_core::catalog::{Catalog, CatalogKind};
use campus_core::content::Content;
use campus_core::error::{CampusError, Result};
use campus_core::format::escape_quotes;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format;

/// Execute the validate command
pub fn execute(cli: &Cli) -> Result<()> {
    // content.toml is parsed here so a broken page fails validation too
    Content::builtin()?;

    let mut checked = Vec::new();
    let mut issues: Vec<ValidationIssue> = Vec::new();
    for kind in CatalogKind::ALL {
        let catalog = Catalog::builtin(kind)?;
        checked.push((kind, catalog.entries.len()));
        issues.extend(validate(catalog));
    }
    let errors = issues.iter().filter(|i| i.is_error()).count();
    let warnings = issues.len() - errors;

    output_by_format!(cli.format,
        json => print_json(&json!({
            "catalogs": checked
                .iter()
                .map(|(kind, entries)| json!({ "catalog": kind.as_str(), "entries": entries }))
                .collect::<Vec<_>>(),
            "errors": errors,
            "warnings": warnings,
            "issues": issues,
        })),
        human => {
            for issue in &issues {
                println!("{}", issue);
            }
            if !cli.quiet {
                for (kind, entries) in &checked {
                    println!("{}: {} entries", kind, entries);
                }
                println!("{} error(s), {} warning(s)", errors, warnings);
            }
        },
        records => {
            print_records_header(
                "validate",
                &[("errors", errors.to_string()), ("warnings", warnings.to_string())],
            );
            for issue in &issues {
                println!(
                    "V {} {} {} \"{}\"",
                    issue.severity,
                    issue.catalog,
                    issue.entity.as_deref().unwrap_or("-"),
                    escape_quotes(&issue.message)
                );
            }
        }
    )?;

    if errors > 0 {
        return Err(CampusError::invalid_catalog(
            "data",
            format!("{} consistency error(s)", errors),
        ));
    }
    Ok(())
}
