//! Integration tests for the campus CLI: catalogs and static pages

mod common;

use common::{campus, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No-Code & AI"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--format", "yaml", "guide"])
        .assert()
        .code(2);
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_glossary_human() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "glossary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Glosario No-Code & IA"))
        .stdout(predicate::str::contains("Webhook"));
}

#[test]
fn test_list_unknown_catalog_is_usage_error() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "recipes"])
        .assert()
        .code(2);
}

#[test]
fn test_list_json_search_and_counts() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "list", "nocode-tools", "--search", "ZAPIER"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["catalog"], "nocode-tools");
    assert_eq!(json["total"], 8);
    assert_eq!(json["matched"], 1);
    assert_eq!(json["items"][0]["id"], "zapier");
    assert_eq!(json["filters"]["search"], "ZAPIER");
}

#[test]
fn test_list_category_accent_insensitive() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "list", "glossary", "-c", "automatizacion"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["filters"]["category"], "Automatización");
    let items = json["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|i| i["category"] == "Automatización"));
}

#[test]
fn test_list_unknown_category_is_usage_error() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "glossary", "--category", "Cocina"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Fundamentos"));
}

#[test]
fn test_list_all_category_sentinel() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "list", "glossary", "-c", "Todas"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["matched"], json["total"]);
}

#[test]
fn test_list_topic_only_for_resources() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "glossary", "--topic", "IA"])
        .assert()
        .code(2);

    let output = campus(dir.path())
        .args(["--format", "json", "list", "resources", "--topic", "ia"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    let items = json["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items
        .iter()
        .all(|i| i["topics"].as_array().unwrap().iter().any(|t| t == "IA")));
}

#[test]
fn test_list_difficulty_rejected_for_tools() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "support-tools", "--difficulty", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_list_no_match_empty_state() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "glossary", "--search", "zzzz-nada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries match the current filters"));
}

#[test]
fn test_list_sort_desc_reverses_order() {
    let dir = tempdir().unwrap();
    let names = |sort: &str| -> Vec<String> {
        let output = campus(dir.path())
            .args(["--format", "json", "list", "support-tools", "--sort", sort])
            .output()
            .unwrap();
        stdout_json(&output)["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap().to_string())
            .collect()
    };
    let mut asc = names("name");
    let desc = names("name-desc");
    assert_eq!(asc.len(), 6);
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_list_sort_category_groups() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "list", "nocode-tools", "--sort", "category"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let groups = json["groups"].as_array().unwrap();
    assert!(!groups.is_empty());
    let grouped: usize = groups
        .iter()
        .map(|g| g["ids"].as_array().unwrap().len())
        .sum();
    assert_eq!(grouped, 8);
}

#[test]
fn test_list_expand_shows_details() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "glossary", "--expand", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("▾ API"))
        .stdout(predicate::str::contains("Relacionados: Webhook, JSON"));
}

#[test]
fn test_list_expand_unknown_id_is_data_error() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["list", "glossary", "--expand", "nope"])
        .assert()
        .code(3);
}

#[test]
fn test_list_records_format() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--format", "records", "list", "glossary", "--tag", "destacado"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H campus=1 records=1 mode=list"))
        .stdout(predicate::str::contains("E api \"API\""));
}

// ============================================================================
// show / categories
// ============================================================================

#[test]
fn test_show_entry_with_links() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["show", "glossary", "webhook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Webhook"))
        .stdout(predicate::str::contains("See also:"))
        .stdout(predicate::str::contains("[[").not());
}

#[test]
fn test_show_unknown_entry_json_error() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "show", "glossary", "nope"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "entity_not_found");
}

#[test]
fn test_categories_counts() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "categories", "resources"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let total: u64 = json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 10);
    assert_eq!(json["topics"].as_array().unwrap().len(), 5);
}

// ============================================================================
// static pages
// ============================================================================

#[test]
fn test_faq_search() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["faq", "--search", "contraseña"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acceso"));
}

#[test]
fn test_faq_unknown_category() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["faq", "--category", "Pagos"])
        .assert()
        .code(2);
}

#[test]
fn test_guide_in_order() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "guide"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let numbers: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_worksheets_list_and_open() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .arg("worksheets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ficha de idea"));

    campus(dir.path())
        .args(["worksheets", "metricas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ficha de métricas"));

    campus(dir.path())
        .args(["worksheets", "nope"])
        .assert()
        .code(3);
}

#[test]
fn test_validate_builtin_catalogs() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 error(s)"));
}
