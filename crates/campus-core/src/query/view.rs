//! Page-level view state over one catalog
//!
//! A view owns the filter selection, sort mode and expansion state of one
//! catalog page. Every input change recomputes the outcome before returning,
//! so the selection and the result list are never observed out of step.

use super::{run, CategoryFilter, Dimensions, FilterOutcome, FilterSelection, Filterable, SortMode};
use crate::bail_unsupported;
use crate::catalog::Difficulty;
use crate::error::Result;
use crate::expansion::Expansion;

pub struct CatalogView<'a, T> {
    label: &'a str,
    items: &'a [T],
    dimensions: Dimensions,
    selection: FilterSelection,
    sort: SortMode,
    expansion: Expansion,
    outcome: FilterOutcome<'a, T>,
}

impl<'a, T: Filterable> CatalogView<'a, T> {
    /// Create a view with every filter inactive and name-ascending order
    pub fn new(label: &'a str, items: &'a [T], dimensions: Dimensions) -> Self {
        let selection = FilterSelection::new();
        let sort = SortMode::default();
        let outcome = run(items, &selection, sort);
        Self {
            label,
            items,
            dimensions,
            selection,
            sort,
            expansion: Expansion::new(),
            outcome,
        }
    }

    pub fn outcome(&self) -> &FilterOutcome<'a, T> {
        &self.outcome
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn expansion_mut(&mut self) -> &mut Expansion {
        &mut self.expansion
    }

    /// Look up an entity of the source catalog by id
    pub fn entity(&self, id: &str) -> Option<&'a T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn set_search(&mut self, search: &str) {
        self.selection.set_search(search);
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> Result<()> {
        if category != CategoryFilter::All && !self.dimensions.category {
            bail_unsupported!("category filter", self.label, self.supported());
        }
        self.selection.set_category(category);
        self.recompute();
        Ok(())
    }

    pub fn toggle_tag(&mut self, tag: &str) -> Result<bool> {
        if !self.dimensions.tags {
            bail_unsupported!("tag filter", self.label, self.supported());
        }
        let active = self.selection.toggle_tag(tag);
        self.recompute();
        Ok(active)
    }

    pub fn toggle_topic(&mut self, topic: &str) -> Result<bool> {
        if !self.dimensions.topics {
            bail_unsupported!("topic filter", self.label, self.supported());
        }
        let active = self.selection.toggle_topic(topic);
        self.recompute();
        Ok(active)
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) -> Result<()> {
        if difficulty.is_some() && !self.dimensions.difficulty {
            bail_unsupported!("difficulty filter", self.label, self.supported());
        }
        self.selection.set_difficulty(difficulty);
        self.recompute();
        Ok(())
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.recompute();
    }

    /// Reset every filter dimension; the sort mode is kept
    pub fn clear_filters(&mut self) {
        self.selection.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.outcome = run(self.items, &self.selection, self.sort);
        tracing::debug!(
            catalog = self.label,
            total = self.outcome.total,
            matched = self.outcome.matched(),
            sort = %self.sort,
            "catalog_view_recomputed"
        );
    }

    fn supported(&self) -> String {
        let mut dims = vec!["search"];
        if self.dimensions.category {
            dims.push("category");
        }
        if self.dimensions.tags {
            dims.push("tag");
        }
        if self.dimensions.topics {
            dims.push("topic");
        }
        if self.dimensions.difficulty {
            dims.push("difficulty");
        }
        dims.join(", ")
    }
}
