//! Prompt construction and model-output shaping

use std::fmt::Write;

use super::{CompassAnswer, CompassError, CompassErrorKind, CompassMode};
use crate::catalog::Catalog;
use crate::format::truncate_for_display;

const DIGEST_DESCRIPTION_CHARS: usize = 100;

/// One line per catalog entity: `- [catalog] Name: short description (url)`
pub fn catalog_digest(catalogs: &[&Catalog]) -> String {
    let mut digest = String::new();
    for catalog in catalogs {
        for entity in &catalog.entries {
            let _ = write!(
                digest,
                "- [{}] {}: {}",
                catalog.kind,
                entity.name,
                truncate_for_display(
                    &catalog.render_description(entity),
                    DIGEST_DESCRIPTION_CHARS
                )
            );
            if let Some(url) = entity.details.url() {
                let _ = write!(digest, " ({})", url);
            }
            digest.push('\n');
        }
    }
    digest
}

fn instructions(mode: CompassMode) -> &'static str {
    match mode {
        CompassMode::Search => {
            "Busca en el contenido del campus lo más útil para la consulta del estudiante \
             y explica brevemente por qué cada elemento es relevante."
        }
        CompassMode::Explain => {
            "Explica el concepto de la consulta con palabras sencillas, con un ejemplo \
             práctico, y recomienda contenido del campus para profundizar."
        }
        CompassMode::Path => {
            "Propón una ruta de aprendizaje ordenada de tres a cinco pasos usando el \
             contenido del campus."
        }
    }
}

/// Full prompt sent to the model
pub fn build(mode: CompassMode, query: &str, context: &str) -> String {
    format!(
        "Eres la Brújula del programa No-Code & IA. Responde siempre en español.\n\
         {}\n\n\
         Contenido del campus:\n{}\n\
         Responde solo con JSON de la forma \
         {{\"answer\": \"...\", \"links\": [{{\"title\": \"...\", \"url\": \"...\", \"description\": \"...\"}}]}}.\n\
         Usa únicamente enlaces que aparezcan en el contenido del campus.\n\n\
         Consulta: {}",
        instructions(mode),
        context,
        query
    )
}

/// Remove a Markdown code fence around the model output, if any
fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string (`json`) on the opening line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Turn model text into an answer
///
/// Structured output is preferred; plain prose becomes an answer without
/// links. Links without a URL are dropped.
pub fn parse_answer(text: &str) -> Result<CompassAnswer, CompassError> {
    let body = strip_fence(text);
    if body.is_empty() {
        return Err(CompassError::new(
            CompassErrorKind::MalformedResponse,
            "model returned an empty answer",
        ));
    }

    match serde_json::from_str::<CompassAnswer>(body) {
        Ok(mut answer) => {
            answer.links.retain(|l| !l.url.trim().is_empty());
            if answer.answer.trim().is_empty() && answer.links.is_empty() {
                return Err(CompassError::new(
                    CompassErrorKind::MalformedResponse,
                    "model returned an empty answer",
                ));
            }
            Ok(answer)
        }
        Err(e) => {
            tracing::debug!(error = %e, "compass_answer_not_json");
            Ok(CompassAnswer {
                answer: body.to_string(),
                links: Vec::new(),
            })
        }
    }
}
