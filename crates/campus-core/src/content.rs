//! Static dashboard pages: FAQ, step-by-step guide, worksheets and benefits

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::catalog::resolve_label;
use crate::error::{CampusError, Result};
use crate::query::{CatalogView, CategoryFilter, Dimensions, Filterable};

/// FAQ pages only offer text search and category
pub const FAQ_DIMENSIONS: Dimensions = Dimensions {
    category: true,
    tags: false,
    topics: false,
    difficulty: false,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl Filterable for FaqEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.question
    }

    fn description(&self) -> &str {
        &self.answer
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// One step of the guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideStep {
    pub number: u32,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub checklist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    pub id: String,
    pub title: String,
    pub objective: String,
    #[serde(default)]
    pub prompts: Vec<String>,
}

/// Premium-only perk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub faq_categories: Vec<String>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub guide: Vec<GuideStep>,
    #[serde(default)]
    pub worksheets: Vec<Worksheet>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
}

impl Content {
    pub fn parse(source: &str) -> Result<Content> {
        let mut content: Content =
            toml::from_str(source).map_err(|e| CampusError::invalid_catalog("content", e))?;
        content.guide.sort_by_key(|step| step.number);
        Ok(content)
    }

    /// The compiled-in dashboard content
    pub fn builtin() -> Result<&'static Content> {
        static CONTENT: OnceLock<std::result::Result<Content, String>> = OnceLock::new();
        CONTENT
            .get_or_init(|| {
                Content::parse(include_str!("../data/content.toml")).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|reason| CampusError::invalid_catalog("content", reason))
    }

    pub fn faq_view(&self) -> CatalogView<'_, FaqEntry> {
        CatalogView::new("faq", &self.faq, FAQ_DIMENSIONS)
    }

    pub fn resolve_faq_category(&self, input: &str) -> Result<CategoryFilter> {
        match input.parse::<CategoryFilter>()? {
            CategoryFilter::All => Ok(CategoryFilter::All),
            CategoryFilter::Only(wanted) => resolve_label(&self.faq_categories, &wanted)
                .map(|c| CategoryFilter::Only(c.to_string()))
                .ok_or_else(|| {
                    CampusError::unsupported("category", wanted, self.faq_categories.join(", "))
                }),
        }
    }

    pub fn worksheet(&self, id: &str) -> Result<&Worksheet> {
        self.worksheets
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| CampusError::not_found("worksheet", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortMode;

    #[test]
    fn test_builtin_content_loads() {
        let content = Content::builtin().unwrap();
        assert!(!content.faq.is_empty());
        assert!(!content.benefits.is_empty());
        for entry in &content.faq {
            assert!(
                content.faq_categories.contains(&entry.category),
                "{} has undeclared category",
                entry.id
            );
        }
    }

    #[test]
    fn test_guide_is_ordered_by_number() {
        let content = Content::parse(
            r#"
            faq_categories = []

            [[guide]]
            number = 2
            title = "Dos"
            summary = ""

            [[guide]]
            number = 1
            title = "Uno"
            summary = ""
            "#,
        )
        .unwrap();
        let numbers: Vec<u32> = content.guide.iter().map(|s| s.number).collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn test_faq_search_matches_question_and_answer() {
        let content = Content::builtin().unwrap();
        let mut view = content.faq_view();
        view.set_search("api-key");
        assert_eq!(view.outcome().matched(), 1);
        assert_eq!(view.outcome().items[0].id, "brujula-limite");

        view.set_search("CONTRASEÑA");
        assert_eq!(view.outcome().items[0].id, "acceso-olvide-clave");
    }

    #[test]
    fn test_faq_category_filter_and_grouping() {
        let content = Content::builtin().unwrap();
        let mut view = content.faq_view();
        let category = content.resolve_faq_category("brujula").unwrap();
        view.set_category(category).unwrap();
        assert!(view.outcome().items.iter().all(|e| e.category == "Brújula"));

        view.clear_filters();
        view.set_sort(SortMode::Category);
        let groups = view.outcome().groups.as_ref().unwrap();
        assert_eq!(groups.len(), content.faq_categories.len());
        assert!(view.toggle_tag("x").is_err());
    }

    #[test]
    fn test_unknown_worksheet() {
        let content = Content::builtin().unwrap();
        assert_eq!(content.worksheet("idea").unwrap().title, "Ficha de idea");
        assert!(matches!(
            content.worksheet("nope"),
            Err(CampusError::NotFound { .. })
        ));
    }
}
