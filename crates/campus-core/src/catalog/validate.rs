//! Consistency checks for catalog data

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::{xref, Catalog};
use crate::query::CategoryFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One problem found in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    pub message: String,
}

impl ValidationIssue {
    fn error(catalog: &Catalog, entity: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Error,
            catalog: catalog.kind.as_str().to_string(),
            entity: entity.map(str::to_string),
            message,
        }
    }

    fn warning(catalog: &Catalog, entity: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(catalog, entity, message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity {
            Some(id) => write!(
                f,
                "{} [{}/{}]: {}",
                self.severity, self.catalog, id, self.message
            ),
            None => write!(f, "{} [{}]: {}", self.severity, self.catalog, self.message),
        }
    }
}

/// Check a catalog and return every issue found
pub fn validate(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_declarations(catalog, &mut issues);

    let declared_categories: HashSet<&str> =
        catalog.categories.iter().map(String::as_str).collect();
    let declared_topics: HashSet<&str> = catalog.topics.iter().map(String::as_str).collect();
    let ids: HashSet<&str> = catalog.entries.iter().map(|e| e.id.as_str()).collect();
    let dimensions = catalog.kind.dimensions();

    let mut seen_ids = HashSet::new();
    for entity in &catalog.entries {
        let id = Some(entity.id.as_str());

        if entity.id.trim().is_empty() {
            issues.push(ValidationIssue::error(
                catalog,
                None,
                format!("entry '{}' has an empty id", entity.name),
            ));
        } else if !seen_ids.insert(entity.id.as_str()) {
            issues.push(ValidationIssue::error(catalog, id, "duplicate id".to_string()));
        }

        if entity.name.trim().is_empty() {
            issues.push(ValidationIssue::error(catalog, id, "empty name".to_string()));
        }

        if !declared_categories.contains(entity.category.as_str()) {
            issues.push(ValidationIssue::error(
                catalog,
                id,
                format!("category '{}' is not declared", entity.category),
            ));
        }

        if !dimensions.topics && !entity.topics.is_empty() {
            issues.push(ValidationIssue::warning(
                catalog,
                id,
                "topics are ignored in this catalog".to_string(),
            ));
        }
        for topic in &entity.topics {
            if dimensions.topics && !declared_topics.contains(topic.as_str()) {
                issues.push(ValidationIssue::error(
                    catalog,
                    id,
                    format!("topic '{}' is not declared", topic),
                ));
            }
        }

        if !dimensions.difficulty && entity.difficulty.is_some() {
            issues.push(ValidationIssue::warning(
                catalog,
                id,
                "difficulty is ignored in this catalog".to_string(),
            ));
        }

        for target in xref::references(&entity.description) {
            if !ids.contains(target.as_str()) {
                issues.push(ValidationIssue::error(
                    catalog,
                    id,
                    format!("dangling reference [[{}]]", target),
                ));
            }
        }
        for target in entity.details.related() {
            if !ids.contains(target.as_str()) {
                issues.push(ValidationIssue::error(
                    catalog,
                    id,
                    format!("related entry '{}' does not exist", target),
                ));
            }
        }
    }

    issues
}

fn check_declarations(catalog: &Catalog, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for category in &catalog.categories {
        if CategoryFilter::is_sentinel(category) {
            issues.push(ValidationIssue::error(
                catalog,
                None,
                format!("'{}' is reserved and cannot be a category", category),
            ));
        }
        if !seen.insert(category.as_str()) {
            issues.push(ValidationIssue::error(
                catalog,
                None,
                format!("category '{}' declared twice", category),
            ));
        }
    }

    if !catalog.kind.dimensions().topics && !catalog.topics.is_empty() {
        issues.push(ValidationIssue::warning(
            catalog,
            None,
            "topics declared but this catalog has no topic filter".to_string(),
        ));
    }
}
