//! Gemini `generateContent` backend
//!
//! No timeout beyond the transport defaults and no retries: a failed call is
//! reported to the student, who decides whether to try again.

use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, warn};
use ureq::Agent;

use super::{CompassError, CompassErrorKind, CompletionBackend};
use crate::trace_time;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub struct GeminiBackend {
    agent: Agent,
    endpoint: String,
    model: String,
    user_agent: String,
}

impl GeminiBackend {
    pub fn new(endpoint: &str, model: &str) -> Self {
        // non-2xx responses are classified from their body, not surfaced as transport errors
        let config = Agent::config_builder().http_status_as_error(false).build();
        Self {
            agent: config.into(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            user_agent: format!("campus/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl CompletionBackend for GeminiBackend {
    fn complete(&self, prompt: &str, api_key: &str) -> Result<String, CompassError> {
        let start = Instant::now();
        let payload = json!({ "contents": [{ "parts": [{ "text": prompt }] }] }).to_string();

        let mut response = self
            .agent
            .post(&self.url())
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.user_agent)
            .header("x-goog-api-key", api_key)
            .send(payload.as_str())
            .map_err(|e| {
                warn!(error = %e, "compass upstream unreachable");
                CompassError::new(CompassErrorKind::Network, format!("transport error: {}", e))
            })?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(|e| {
            CompassError::new(
                CompassErrorKind::Network,
                format!("failed to read response: {}", e),
            )
        })?;

        trace_time!(start, "gemini_generate", status = status);

        if !(200..300).contains(&status) {
            let err = classify_status(status, &body);
            warn!(status, kind = err.kind.as_str(), "compass upstream error");
            return Err(err);
        }

        debug!(status, bytes = body.len(), "gemini_response");
        extract_text(&body)
    }
}

/// Map an unsuccessful upstream status to an error kind
pub fn classify_status(status: u16, body: &str) -> CompassError {
    let detail = upstream_message(body).unwrap_or_else(|| format!("HTTP {}", status));
    let kind = match status {
        429 => CompassErrorKind::RateLimit,
        400 | 401 | 403 | 404 => CompassErrorKind::InvalidRequest,
        _ => CompassErrorKind::Upstream,
    };
    let message = match kind {
        CompassErrorKind::RateLimit => format!("usage limit reached: {}", detail),
        _ => detail,
    };
    CompassError::new(kind, message)
}

/// `error.message` of a Google API error body
fn upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value["error"]["message"].as_str().map(str::to_string)
}

/// Concatenate the text parts of the first candidate
pub fn extract_text(body: &str) -> Result<String, CompassError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        CompassError::new(
            CompassErrorKind::MalformedResponse,
            format!("response is not JSON: {}", e),
        )
    })?;

    if let Some(reason) = value["promptFeedback"]["blockReason"].as_str() {
        return Err(CompassError::new(
            CompassErrorKind::InvalidRequest,
            format!("query was blocked by the model ({})", reason),
        ));
    }

    let parts = value["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| {
            CompassError::new(
                CompassErrorKind::MalformedResponse,
                "response has no candidate text",
            )
        })?;

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if text.trim().is_empty() {
        return Err(CompassError::new(
            CompassErrorKind::MalformedResponse,
            "candidate text is empty",
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shape() {
        let backend = GeminiBackend::new("https://example.test/v1beta/", "gemini-x");
        assert_eq!(
            backend.url(),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
    }

    #[test]
    fn test_classify_rate_limit() {
        let body = r#"{"error": {
            "code": 429,
            "message": "Resource has been exhausted",
            "status": "RESOURCE_EXHAUSTED"
        }}"#;
        let err = classify_status(429, body);
        assert_eq!(err.kind, CompassErrorKind::RateLimit);
        assert!(err.message.contains("Resource has been exhausted"));
    }

    #[test]
    fn test_classify_other_statuses() {
        assert_eq!(
            classify_status(400, "{}").kind,
            CompassErrorKind::InvalidRequest
        );
        assert_eq!(classify_status(503, "").kind, CompassErrorKind::Upstream);
        assert_eq!(classify_status(503, "").message, "HTTP 503");
    }

    #[test]
    fn test_extract_joins_parts() {
        let body =
            r#"{"candidates": [{"content": {"parts": [{"text": "Hola, "}, {"text": "mundo"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "Hola, mundo");
    }

    #[test]
    fn test_extract_malformed_bodies() {
        let blank = r#"{"candidates": [{"content": {"parts": [{"text": " "}]}}]}"#;
        for body in ["not json", r#"{"candidates": []}"#, blank] {
            assert_eq!(
                extract_text(body).unwrap_err().kind,
                CompassErrorKind::MalformedResponse,
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_extract_blocked_prompt() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let err = extract_text(body).unwrap_err();
        assert_eq!(err.kind, CompassErrorKind::InvalidRequest);
        assert!(err.message.contains("SAFETY"));
    }
}
