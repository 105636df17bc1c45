//! Catalog filtering predicates

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::Filterable;
use crate::catalog::Difficulty;
use crate::error::CampusError;

/// Category selection; `All` is a UI sentinel and never a stored category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Spellings accepted for the "all" sentinel
    pub const ALL_SENTINELS: &'static [&'static str] = &["all", "todos", "todas"];

    /// Whether a label is one of the reserved sentinel spellings
    pub fn is_sentinel(label: &str) -> bool {
        let label = label.trim();
        Self::ALL_SENTINELS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(label))
    }
}

impl FromStr for CategoryFilter {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CampusError::invalid_value("category", s));
        }
        if Self::is_sentinel(trimmed) {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(trimmed.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// The active filter selection of one catalog view
///
/// Dimensions combine with AND; tags and topics are multi-select and
/// combine with OR inside their dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    search: String,
    needle: String,
    category: CategoryFilter,
    tags: BTreeSet<String>,
    topics: BTreeSet<String>,
    difficulty: Option<Difficulty>,
}

impl FilterSelection {
    /// Create a selection with every dimension inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    /// Set the category filter
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Add a tag to the active tag set
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add a topic to the active topic set
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.insert(topic.into());
        self
    }

    /// Set the difficulty filter
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.needle = self.search.trim().to_lowercase();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    /// Toggle a tag in or out of the active set; returns whether it is now active
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        toggle(&mut self.tags, tag)
    }

    /// Toggle a topic in or out of the active set; returns whether it is now active
    pub fn toggle_topic(&mut self, topic: &str) -> bool {
        toggle(&mut self.topics, topic)
    }

    /// Reset every dimension to inactive
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn topics(&self) -> &BTreeSet<String> {
        &self.topics
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// True when no dimension narrows the catalog
    pub fn is_vacuous(&self) -> bool {
        self.needle.is_empty()
            && self.category == CategoryFilter::All
            && self.tags.is_empty()
            && self.topics.is_empty()
            && self.difficulty.is_none()
    }

    /// Check if an entity matches all active dimensions
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if !self.matches_search(item) {
            return false;
        }

        if !self.matches_category(item) {
            return false;
        }

        if !self.matches_tags(item) {
            return false;
        }

        if !self.matches_topics(item) {
            return false;
        }

        if !self.matches_difficulty(item) {
            return false;
        }

        true
    }

    /// Case-insensitive substring over name, description, tags and author
    pub fn matches_search<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        let needle = self.needle.as_str();
        item.name().to_lowercase().contains(needle)
            || item.description().to_lowercase().contains(needle)
            || item
                .tags()
                .iter()
                .any(|t| t.to_lowercase().contains(needle))
            || item
                .author()
                .is_some_and(|a| a.to_lowercase().contains(needle))
    }

    /// Check category filter
    pub fn matches_category<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category() == category,
        }
    }

    /// Check tag filter (any active tag)
    pub fn matches_tags<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.tags.is_empty() || item.tags().iter().any(|t| self.tags.contains(t))
    }

    /// Check topic filter (any active topic)
    pub fn matches_topics<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.topics.is_empty() || item.topics().iter().any(|t| self.topics.contains(t))
    }

    /// Check difficulty filter
    pub fn matches_difficulty<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        match self.difficulty {
            Some(level) => item.difficulty() == Some(level),
            None => true,
        }
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}
