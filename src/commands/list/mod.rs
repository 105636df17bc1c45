//! `campus list` command - browse a catalog
//!
//! Search, category, tag, topic and difficulty filters combine with AND;
//! repeated `--tag` / `--topic` values combine with OR. Results are sorted
//! by name (Spanish collation) unless `--sort` says otherwise, and grouped
//! under category headings with `--sort category`.

pub mod format;

use std::collections::BTreeSet;

use campus_core::bail_invalid;
use campus_core::catalog::{Catalog, CatalogEntity};
use campus_core::error::Result;
use campus_core::query::CatalogView;

use crate::cli::{Cli, ListArgs};
use crate::output_by_format;

use self::format::{output_human, output_json, output_records};

/// Execute the list command
pub fn execute(cli: &Cli, args: &ListArgs) -> Result<()> {
    let catalog = Catalog::builtin(args.catalog)?;
    let mut view = catalog.view();

    apply_filters(&mut view, catalog, args)?;
    view.set_sort(args.sort);

    if let Some(id) = &args.expand {
        catalog.require(id)?;
        view.expansion_mut().toggle(id);
    }

    output_by_format!(cli.format,
        json => output_json(catalog, &view),
        human => { output_human(cli, catalog, &view); },
        records => { output_records(catalog, &view); }
    )
}

/// Translate command-line filters into view inputs
fn apply_filters(
    view: &mut CatalogView<'_, CatalogEntity>,
    catalog: &Catalog,
    args: &ListArgs,
) -> Result<()> {
    if let Some(search) = &args.search {
        view.set_search(search);
    }

    if let Some(category) = &args.category {
        view.set_category(catalog.resolve_category(category)?)?;
    }

    // repeated values select a tag once rather than toggling it off again
    let mut tags = BTreeSet::new();
    for tag in &args.tag {
        let tag = tag.trim();
        if tag.is_empty() {
            bail_invalid!("tag", "(empty)");
        }
        tags.insert(tag);
    }
    for tag in tags {
        view.toggle_tag(tag)?;
    }

    let mut topics = BTreeSet::new();
    for topic in &args.topic {
        let topic = if catalog.kind.dimensions().topics {
            catalog.resolve_topic(topic)?
        } else {
            topic.trim().to_string()
        };
        topics.insert(topic);
    }
    for topic in &topics {
        view.toggle_topic(topic)?;
    }

    if args.difficulty.is_some() {
        view.set_difficulty(args.difficulty)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests;
