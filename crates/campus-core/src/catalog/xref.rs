//! Cross-references between catalog entities
//!
//! Descriptions may mention other entities of the same catalog as `[[id]]`
//! or `[[id|label]]`.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

fn wiki_link_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(r"\[\[([^\]|]+)(?:\|([^\]]+))?\]\]") {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "Failed to compile cross-reference regex");
            None
        }
    })
    .as_ref()
}

/// Referenced ids in order of first appearance, without duplicates
pub fn references(text: &str) -> Vec<String> {
    let Some(re) = wiki_link_re() else {
        return Vec::new();
    };

    let mut ids: Vec<String> = Vec::new();
    for cap in re.captures_iter(text) {
        let id = cap[1].trim();
        if id.is_empty() || ids.iter().any(|seen| seen == id) {
            continue;
        }
        ids.push(id.to_string());
    }
    ids
}

/// Replace references with readable names
///
/// An explicit label wins; otherwise `resolve` supplies the target's name.
/// Unresolvable references fall back to the bare id.
pub fn render<'a, F>(text: &str, resolve: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let Some(re) = wiki_link_re() else {
        return text.to_string();
    };

    re.replace_all(text, |cap: &regex::Captures<'_>| {
        let id = cap[1].trim();
        match cap.get(2) {
            Some(label) => label.as_str().trim().to_string(),
            None => resolve(id).unwrap_or(id).to_string(),
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_in_order_without_duplicates() {
        let text = "Usa una [[api]] o un [[webhook|gancho]]; ver también [[api]].";
        assert_eq!(references(text), ["api", "webhook"]);
    }

    #[test]
    fn test_no_references() {
        assert!(references("Texto sin enlaces [ni] corchetes]]").is_empty());
    }

    #[test]
    fn test_render_uses_names_and_labels() {
        let text = "Ver [[api]], [[webhook|el gancho]] y [[perdido]].";
        let rendered = render(text, |id| match id {
            "api" => Some("API"),
            _ => None,
        });
        assert_eq!(rendered, "Ver API, el gancho y perdido.");
    }
}
