//! Sort modes for catalog results

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Filterable;
use crate::error::CampusError;
use crate::text::collate;

/// Ordering applied to a filtered catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Name ascending
    #[default]
    Name,
    /// Name descending
    NameDesc,
    /// Category, then name; results are also grouped by category
    Category,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::NameDesc => "name-desc",
            SortMode::Category => "category",
        }
    }

    /// Whether results in this mode are partitioned into category groups
    pub fn groups(&self) -> bool {
        matches!(self, SortMode::Category)
    }

    /// Total order over entities for this mode
    pub fn compare<T: Filterable + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortMode::Name => by_name(a, b),
            SortMode::NameDesc => by_name(b, a),
            SortMode::Category => {
                collate::compare(a.category(), b.category()).then_with(|| by_name(a, b))
            }
        }
    }
}

/// Name under Spanish collation; the id breaks exact ties
fn by_name<T: Filterable + ?Sized>(a: &T, b: &T) -> Ordering {
    collate::compare(a.name(), b.name()).then_with(|| a.id().cmp(b.id()))
}

impl FromStr for SortMode {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "name-asc" | "asc" | "az" => Ok(SortMode::Name),
            "name-desc" | "desc" | "za" => Ok(SortMode::NameDesc),
            "category" | "by-category" | "categoria" | "categoría" => Ok(SortMode::Category),
            other => Err(CampusError::unsupported(
                "sort mode",
                other,
                "name, name-desc, category",
            )),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{abc, Item};

    fn sorted(mode: SortMode, mut items: Vec<Item>) -> Vec<String> {
        items.sort_by(|a, b| mode.compare(a, b));
        items.into_iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_name_ascending() {
        let items = vec![
            Item::new("g", "Gamma", "X", None),
            Item::new("a", "alpha", "Y", None),
            Item::new("b", "Beta", "X", None),
        ];
        assert_eq!(sorted(SortMode::Name, items), ["a", "b", "g"]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let items = vec![
            Item::new("1", "Dup", "X", None),
            Item::new("2", "Ñu", "Y", None),
            Item::new("3", "Nube", "X", None),
            Item::new("0", "Dup", "Y", None),
        ];
        let asc = sorted(SortMode::Name, items.clone());
        let mut desc = sorted(SortMode::NameDesc, items);
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc, ["0", "1", "3", "2"]);
    }

    #[test]
    fn test_category_then_name() {
        assert_eq!(sorted(SortMode::Category, abc()), ["a", "c", "b"]);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("desc".parse::<SortMode>().unwrap(), SortMode::NameDesc);
        assert_eq!("Categoría".parse::<SortMode>().unwrap(), SortMode::Category);
        assert!(matches!(
            "random".parse::<SortMode>(),
            Err(CampusError::Unsupported { .. })
        ));
    }
}
