//! Static catalogs: glossary, resource library and tool listings
//!
//! Catalog data is authored as TOML under `data/` and compiled into the
//! binary. Each document declares its category list (and, for the resource
//! library, its topic list) next to the entries.

pub mod entity;
pub mod validate;
pub mod xref;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CampusError, Result};
use crate::query::{CatalogView, CategoryFilter, Dimensions};
use crate::text::collate;

pub use entity::{CatalogEntity, Details, Difficulty, Pricing, ResourceFormat};
pub use validate::{Severity, ValidationIssue};

/// The built-in catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Glossary,
    Resources,
    NocodeTools,
    SupportTools,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::Glossary,
        CatalogKind::Resources,
        CatalogKind::NocodeTools,
        CatalogKind::SupportTools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Glossary => "glossary",
            CatalogKind::Resources => "resources",
            CatalogKind::NocodeTools => "nocode-tools",
            CatalogKind::SupportTools => "support-tools",
        }
    }

    /// Filter dimensions offered on this catalog's page
    pub fn dimensions(&self) -> Dimensions {
        match self {
            CatalogKind::Glossary => Dimensions {
                category: true,
                tags: true,
                topics: false,
                difficulty: true,
            },
            CatalogKind::Resources => Dimensions::ALL,
            CatalogKind::NocodeTools | CatalogKind::SupportTools => Dimensions {
                category: true,
                tags: true,
                topics: false,
                difficulty: false,
            },
        }
    }

    fn source(&self) -> &'static str {
        match self {
            CatalogKind::Glossary => include_str!("../../data/glossary.toml"),
            CatalogKind::Resources => include_str!("../../data/resources.toml"),
            CatalogKind::NocodeTools => include_str!("../../data/nocode_tools.toml"),
            CatalogKind::SupportTools => include_str!("../../data/support_tools.toml"),
        }
    }

    fn slot(&self) -> &'static OnceLock<std::result::Result<Catalog, String>> {
        static GLOSSARY: OnceLock<std::result::Result<Catalog, String>> = OnceLock::new();
        static RESOURCES: OnceLock<std::result::Result<Catalog, String>> = OnceLock::new();
        static NOCODE_TOOLS: OnceLock<std::result::Result<Catalog, String>> = OnceLock::new();
        static SUPPORT_TOOLS: OnceLock<std::result::Result<Catalog, String>> = OnceLock::new();

        match self {
            CatalogKind::Glossary => &GLOSSARY,
            CatalogKind::Resources => &RESOURCES,
            CatalogKind::NocodeTools => &NOCODE_TOOLS,
            CatalogKind::SupportTools => &SUPPORT_TOOLS,
        }
    }
}

impl FromStr for CatalogKind {
    type Err = CampusError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "glossary" | "glosario" | "terms" => Ok(CatalogKind::Glossary),
            "resources" | "recursos" | "library" => Ok(CatalogKind::Resources),
            "nocode-tools" | "nocode" | "tools" | "herramientas" => Ok(CatalogKind::NocodeTools),
            "support-tools" | "support" | "apoyo" => Ok(CatalogKind::SupportTools),
            other => Err(CampusError::unsupported(
                "catalog",
                other,
                "glossary, resources, nocode-tools, support-tools",
            )),
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk catalog document format
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    title: String,
    categories: Vec<String>,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    entries: Vec<CatalogEntity>,
}

/// A loaded catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub kind: CatalogKind,
    pub title: String,
    pub categories: Vec<String>,
    pub topics: Vec<String>,
    pub entries: Vec<CatalogEntity>,
}

impl Catalog {
    /// Parse a catalog document
    pub fn parse(kind: CatalogKind, source: &str) -> Result<Catalog> {
        let doc: CatalogDocument =
            toml::from_str(source).map_err(|e| CampusError::invalid_catalog(kind.as_str(), e))?;

        Ok(Catalog {
            kind,
            title: doc.title,
            categories: doc.categories,
            topics: doc.topics,
            entries: doc.entries,
        })
    }

    /// The compiled-in catalog of a kind, parsed once per process
    pub fn builtin(kind: CatalogKind) -> Result<&'static Catalog> {
        kind.slot()
            .get_or_init(|| {
                let parsed = Catalog::parse(kind, kind.source()).map_err(|e| e.to_string());
                if let Ok(catalog) = &parsed {
                    debug!(
                        catalog = kind.as_str(),
                        entries = catalog.entries.len(),
                        "catalog_loaded"
                    );
                }
                parsed
            })
            .as_ref()
            .map_err(|reason| CampusError::invalid_catalog(kind.as_str(), reason))
    }

    /// A fresh page view over this catalog
    pub fn view(&self) -> CatalogView<'_, CatalogEntity> {
        CatalogView::new(self.kind.as_str(), &self.entries, self.kind.dimensions())
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntity> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look up an entity, failing with a data error when absent
    pub fn require(&self, id: &str) -> Result<&CatalogEntity> {
        self.get(id).ok_or_else(|| CampusError::EntityNotFound {
            catalog: self.kind.as_str().to_string(),
            id: id.to_string(),
        })
    }

    /// Resolve user input to a declared category
    ///
    /// Matching ignores case and accents; sentinels resolve to `All`.
    pub fn resolve_category(&self, input: &str) -> Result<CategoryFilter> {
        match input.parse::<CategoryFilter>()? {
            CategoryFilter::All => Ok(CategoryFilter::All),
            CategoryFilter::Only(wanted) => resolve_label(&self.categories, &wanted)
                .map(|c| CategoryFilter::Only(c.to_string()))
                .ok_or_else(|| {
                    CampusError::unsupported("category", wanted, self.categories.join(", "))
                }),
        }
    }

    /// Resolve user input to a declared topic
    pub fn resolve_topic(&self, input: &str) -> Result<String> {
        resolve_label(&self.topics, input)
            .map(str::to_string)
            .ok_or_else(|| {
                let supported = if self.topics.is_empty() {
                    "none".to_string()
                } else {
                    self.topics.join(", ")
                };
                CampusError::unsupported("topic", input.trim(), supported)
            })
    }

    /// Entity count per declared category, in declared order
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let count = self.entries.iter().filter(|e| &e.category == c).count();
                (c.as_str(), count)
            })
            .collect()
    }

    /// Entity count per declared topic, in declared order
    pub fn topic_counts(&self) -> Vec<(&str, usize)> {
        self.topics
            .iter()
            .map(|t| {
                let count = self.entries.iter().filter(|e| e.topics.contains(t)).count();
                (t.as_str(), count)
            })
            .collect()
    }

    /// Every tag used by at least one entity, sorted
    pub fn tags(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .collect()
    }

    /// Human-readable description with cross-references replaced by names
    pub fn render_description(&self, entity: &CatalogEntity) -> String {
        xref::render(&entity.description, |id| {
            self.get(id).map(|target| target.name.as_str())
        })
    }

    /// Entities an entity points at, through description references and `related`
    pub fn linked_entities(&self, entity: &CatalogEntity) -> Vec<&CatalogEntity> {
        let mut ids = xref::references(&entity.description);
        for id in entity.details.related() {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }

        ids.iter()
            .filter(|id| **id != entity.id)
            .filter_map(|id| self.get(id))
            .collect()
    }
}

/// Find the declared spelling of a label, ignoring case and accents
pub(crate) fn resolve_label<'a>(declared: &'a [String], input: &str) -> Option<&'a str> {
    let input = input.trim();
    declared
        .iter()
        .find(|d| d.as_str() == input)
        .or_else(|| {
            let wanted = collate::sort_key(input);
            declared.iter().find(|d| collate::sort_key(d) == wanted)
        })
        .map(String::as_str)
}
