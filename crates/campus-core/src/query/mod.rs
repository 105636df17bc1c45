//! Catalog querying: filter predicates, sorting, grouping and page views
//!
//! Every catalog (glossary terms, resources, tools, FAQ entries) goes
//! through the same engine. Entities only need to implement [`Filterable`].

pub mod engine;
pub mod filter;
pub mod sort;
pub mod view;

use crate::catalog::Difficulty;

pub use engine::{run, CategoryGroup, FilterOutcome};
pub use filter::{CategoryFilter, FilterSelection};
pub use sort::SortMode;
pub use view::CatalogView;

/// The filterable core shared by all catalog entity kinds
///
/// Optional dimensions default to "absent"; an absent field never matches a
/// specific filter value but never fails either.
pub trait Filterable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;

    fn tags(&self) -> &[String] {
        &[]
    }

    fn topics(&self) -> &[String] {
        &[]
    }

    fn difficulty(&self) -> Option<Difficulty> {
        None
    }

    fn author(&self) -> Option<&str> {
        None
    }
}

/// Which filter dimensions a catalog supports besides free-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub category: bool,
    pub tags: bool,
    pub topics: bool,
    pub difficulty: bool,
}

impl Dimensions {
    /// Every dimension enabled
    pub const ALL: Dimensions = Dimensions {
        category: true,
        tags: true,
        topics: true,
        difficulty: true,
    };
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Three-entity catalog used across the query tests

    use super::Filterable;
    use crate::catalog::Difficulty;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Item {
        pub id: String,
        pub name: String,
        pub description: String,
        pub category: String,
        pub tags: Vec<String>,
        pub topics: Vec<String>,
        pub difficulty: Option<Difficulty>,
        pub author: Option<String>,
    }

    impl Item {
        pub fn new(id: &str, name: &str, category: &str, difficulty: Option<u8>) -> Self {
            Item {
                id: id.to_string(),
                name: name.to_string(),
                description: String::new(),
                category: category.to_string(),
                tags: Vec::new(),
                topics: Vec::new(),
                difficulty: difficulty.map(|d| Difficulty::try_from(d).unwrap()),
                author: None,
            }
        }

        pub fn described(mut self, description: &str) -> Self {
            self.description = description.to_string();
            self
        }

        pub fn tagged(mut self, tags: &[&str]) -> Self {
            self.tags = tags.iter().map(|t| t.to_string()).collect();
            self
        }

        pub fn with_topics(mut self, topics: &[&str]) -> Self {
            self.topics = topics.iter().map(|t| t.to_string()).collect();
            self
        }

        pub fn by(mut self, author: &str) -> Self {
            self.author = Some(author.to_string());
            self
        }
    }

    impl Filterable for Item {
        fn id(&self) -> &str {
            &self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn description(&self) -> &str {
            &self.description
        }
        fn category(&self) -> &str {
            &self.category
        }
        fn tags(&self) -> &[String] {
            &self.tags
        }
        fn topics(&self) -> &[String] {
            &self.topics
        }
        fn difficulty(&self) -> Option<Difficulty> {
            self.difficulty
        }
        fn author(&self) -> Option<&str> {
            self.author.as_deref()
        }
    }

    /// Alpha/X/1, Beta/Y/2, Gamma/X/1
    pub fn abc() -> Vec<Item> {
        vec![
            Item::new("a", "Alpha", "X", Some(1)),
            Item::new("b", "Beta", "Y", Some(2)),
            Item::new("c", "Gamma", "X", Some(1)),
        ]
    }

    pub fn ids<T: Filterable>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }
}
