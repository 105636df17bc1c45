use super::*;
use campus_core::catalog::{CatalogKind, Difficulty};
use campus_core::error::CampusError;
use campus_core::query::SortMode;

fn args(kind: CatalogKind) -> ListArgs {
    ListArgs {
        catalog: kind,
        search: None,
        category: None,
        tag: vec![],
        topic: vec![],
        difficulty: None,
        sort: SortMode::Name,
        expand: None,
    }
}

fn matched_ids(view: &CatalogView<'_, CatalogEntity>) -> Vec<String> {
    view.outcome().items.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_repeated_tag_selects_once() {
    let catalog = Catalog::builtin(CatalogKind::Glossary).unwrap();
    let mut view = catalog.view();
    let mut list = args(CatalogKind::Glossary);
    list.tag = vec!["destacado".to_string(), "destacado".to_string()];

    apply_filters(&mut view, catalog, &list).unwrap();
    assert_eq!(view.selection().tags().len(), 1);
    assert!(matched_ids(&view).contains(&"api".to_string()));
}

#[test]
fn test_blank_tag_rejected() {
    let catalog = Catalog::builtin(CatalogKind::Glossary).unwrap();
    let mut view = catalog.view();
    let mut list = args(CatalogKind::Glossary);
    list.tag = vec!["  ".to_string()];

    let err = apply_filters(&mut view, catalog, &list).unwrap_err();
    assert!(matches!(err, CampusError::InvalidValue { .. }));
}

#[test]
fn test_category_resolves_without_accents() {
    let catalog = Catalog::builtin(CatalogKind::Resources).unwrap();
    let mut view = catalog.view();
    let mut list = args(CatalogKind::Resources);
    let declared = catalog.categories[0].clone();
    list.category = Some(declared.to_uppercase());

    apply_filters(&mut view, catalog, &list).unwrap();
    assert!(view
        .outcome()
        .items
        .iter()
        .all(|e| e.category == declared));
}

#[test]
fn test_topic_rejected_outside_resources() {
    let catalog = Catalog::builtin(CatalogKind::NocodeTools).unwrap();
    let mut view = catalog.view();
    let mut list = args(CatalogKind::NocodeTools);
    list.topic = vec!["IA".to_string()];

    let err = apply_filters(&mut view, catalog, &list).unwrap_err();
    assert_eq!(err.exit_code() as i32, 2);
}

#[test]
fn test_difficulty_narrows_glossary() {
    let catalog = Catalog::builtin(CatalogKind::Glossary).unwrap();
    let mut view = catalog.view();
    let mut list = args(CatalogKind::Glossary);
    list.difficulty = Some(Difficulty::Beginner);

    apply_filters(&mut view, catalog, &list).unwrap();
    assert!(!view.outcome().items.is_empty());
    assert!(view
        .outcome()
        .items
        .iter()
        .all(|e| e.difficulty.map(|d| d.level()) == Some(1)));
}
