//! Single-pass filter, sort and grouping over a static catalog

use std::time::Instant;

use super::{FilterSelection, Filterable, SortMode};
use crate::trace_time;

/// Entities sharing one category, in sorted order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a, T> {
    pub category: &'a str,
    pub items: Vec<&'a T>,
}

/// Result of one engine run
///
/// `total` is the size of the source catalog, so an empty match list can be
/// told apart from an empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a, T> {
    pub total: usize,
    pub sort: SortMode,
    pub items: Vec<&'a T>,
    pub groups: Option<Vec<CategoryGroup<'a, T>>>,
}

impl<'a, T> FilterOutcome<'a, T> {
    /// Number of matching entities
    pub fn matched(&self) -> usize {
        self.items.len()
    }

    /// True when filters excluded every entity of a non-empty catalog
    pub fn is_filtered_empty(&self) -> bool {
        self.items.is_empty() && self.total > 0
    }
}

/// Filter a catalog, sort the survivors and group them when sorting by category
pub fn run<'a, T: Filterable>(
    items: &'a [T],
    selection: &FilterSelection,
    sort: SortMode,
) -> FilterOutcome<'a, T> {
    let start = Instant::now();

    // filter keeps source order; sort_by is stable
    let mut matched: Vec<&'a T> = items.iter().filter(|i| selection.matches(*i)).collect();
    matched.sort_by(|a, b| sort.compare(*a, *b));

    let groups = sort.groups().then(|| group_by_category(&matched));

    trace_time!(
        start,
        "engine_run",
        total = items.len(),
        matched = matched.len()
    );

    FilterOutcome {
        total: items.len(),
        sort,
        items: matched,
        groups,
    }
}

/// Partition a sorted list into category groups in first-seen order
fn group_by_category<'a, T: Filterable>(sorted: &[&'a T]) -> Vec<CategoryGroup<'a, T>> {
    let mut groups: Vec<CategoryGroup<'a, T>> = Vec::new();

    for &item in sorted {
        match groups.iter_mut().find(|g| g.category == item.category()) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: item.category(),
                items: vec![item],
            }),
        }
    }

    groups
}
