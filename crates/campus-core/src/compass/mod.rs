//! Brújula: AI-assisted content discovery
//!
//! The compass forwards a student's question, together with a digest of the
//! campus catalogs, to a generative model and returns an answer plus
//! suggested links. The model is reached through a [`CompletionBackend`];
//! [`GeminiBackend`] talks to the hosted API and tests use scripted
//! backends.
//!
//! Failures are classified into a small set of [`CompassErrorKind`]s so the
//! popup can react to them (for example, offering to retry with the
//! student's own key after a rate limit). Nothing is retried automatically.

pub mod gemini;
pub mod popup;
pub mod prompt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::CampusError;

pub use gemini::GeminiBackend;
pub use popup::{CompassPopup, PopupState, SubmitRefusal, Ticket};

/// Longest accepted query, in characters
pub const MAX_QUERY_CHARS: usize = 500;

/// What the student wants from the compass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompassMode {
    /// Find campus content about a subject
    #[default]
    Search,
    /// Explain a concept in plain words
    Explain,
    /// Propose an ordered learning path
    Path,
}

impl CompassMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassMode::Search => "search",
            CompassMode::Explain => "explain",
            CompassMode::Path => "path",
        }
    }
}

impl FromStr for CompassMode {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search" | "buscar" => Ok(CompassMode::Search),
            "explain" | "explicar" => Ok(CompassMode::Explain),
            "path" | "ruta" => Ok(CompassMode::Path),
            other => Err(CampusError::unsupported(
                "compass mode",
                other,
                "search, explain, path",
            )),
        }
    }
}

impl fmt::Display for CompassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request accepted by the compass proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassRequest {
    pub mode: CompassMode,
    pub query: String,
    /// Student-supplied upstream key, used instead of the shared one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl CompassRequest {
    pub fn new(mode: CompassMode, query: impl Into<String>) -> Self {
        Self {
            mode,
            query: query.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedLink {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Successful compass reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassAnswer {
    pub answer: String,
    #[serde(default)]
    pub links: Vec<SuggestedLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompassErrorKind {
    /// Upstream quota exhausted; the student may retry with their own key
    RateLimit,
    InvalidRequest,
    MissingCredential,
    Upstream,
    Network,
    MalformedResponse,
}

impl CompassErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassErrorKind::RateLimit => "rate_limit",
            CompassErrorKind::InvalidRequest => "invalid_request",
            CompassErrorKind::MissingCredential => "missing_credential",
            CompassErrorKind::Upstream => "upstream",
            CompassErrorKind::Network => "network",
            CompassErrorKind::MalformedResponse => "malformed_response",
        }
    }
}

impl fmt::Display for CompassErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified compass failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({kind})")]
pub struct CompassError {
    pub kind: CompassErrorKind,
    pub message: String,
}

impl CompassError {
    pub fn new(kind: CompassErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether resubmitting with the student's own key may help
    pub fn allows_own_key(&self) -> bool {
        self.kind == CompassErrorKind::RateLimit
    }
}

/// Wire shape of a proxy reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompassReply {
    Answer(CompassAnswer),
    Error {
        error: String,
        error_type: CompassErrorKind,
    },
}

impl From<Result<CompassAnswer, CompassError>> for CompassReply {
    fn from(result: Result<CompassAnswer, CompassError>) -> Self {
        match result {
            Ok(answer) => CompassReply::Answer(answer),
            Err(e) => CompassReply::Error {
                error: e.message,
                error_type: e.kind,
            },
        }
    }
}

/// Text-completion model behind the compass
pub trait CompletionBackend {
    /// Send a prompt and return the model's raw text
    fn complete(&self, prompt: &str, api_key: &str) -> Result<String, CompassError>;
}

/// Validates requests, picks the credential and shapes model output
pub struct CompassService<B> {
    backend: B,
    shared_key: Option<String>,
    context: String,
}

impl<B: CompletionBackend> CompassService<B> {
    /// `context` is the catalog digest embedded in every prompt
    pub fn new(backend: B, shared_key: Option<String>, context: String) -> Self {
        Self {
            backend,
            shared_key: shared_key.filter(|k| !k.trim().is_empty()),
            context,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn handle(&self, request: &CompassRequest) -> Result<CompassAnswer, CompassError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(CompassError::new(
                CompassErrorKind::InvalidRequest,
                "query is empty",
            ));
        }
        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(CompassError::new(
                CompassErrorKind::InvalidRequest,
                format!("query is longer than {} characters", MAX_QUERY_CHARS),
            ));
        }

        let own_key = request
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());
        let key = match (own_key, self.shared_key.as_deref()) {
            (Some(key), _) => key,
            (None, Some(key)) => key,
            (None, None) => {
                return Err(CompassError::new(
                    CompassErrorKind::MissingCredential,
                    "no API key configured; pass your own key to continue",
                ))
            }
        };

        info!(
            mode = request.mode.as_str(),
            own_key = own_key.is_some(),
            query_chars = query.chars().count(),
            "compass_request"
        );

        let prompt = prompt::build(request.mode, query, &self.context);
        let text = self.backend.complete(&prompt, key)?;
        let answer = prompt::parse_answer(&text)?;

        debug!(links = answer.links.len(), "compass_answer");
        Ok(answer)
    }
}
