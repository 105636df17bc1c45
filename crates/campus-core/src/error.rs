//! Error types and exit codes for campus
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, missing session)
//! - 3: Data error (unknown entity, invalid catalog data)

mod macros;

use thiserror::Error;

use crate::compass::CompassError;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown entity, invalid catalog data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campus operations
#[derive(Error, Debug)]
pub enum CampusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("sign-in required: pass --user or set CAMPUS_USER")]
    SessionRequired,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{catalog} entry not found: {id}")]
    EntityNotFound { catalog: String, id: String },

    #[error("invalid catalog {catalog}: {reason}")]
    InvalidCatalog { catalog: String, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("this page is only available to premium members (current role: {role})")]
    AccessDenied { role: String },

    #[error("Brújula request failed: {0}")]
    Compass(#[from] CompassError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl CampusError {
    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for something that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        CampusError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a built-in catalog that failed to load or validate
    pub fn invalid_catalog(catalog: &str, reason: impl std::fmt::Display) -> Self {
        CampusError::InvalidCatalog {
            catalog: catalog.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, reason: impl std::fmt::Display) -> Self {
        CampusError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CampusError::UnknownFormat(_)
            | CampusError::DuplicateFormat
            | CampusError::UsageError(_)
            | CampusError::SessionRequired
            | CampusError::InvalidValue { .. }
            | CampusError::Unsupported { .. } => ExitCode::Usage,

            CampusError::EntityNotFound { .. }
            | CampusError::InvalidCatalog { .. }
            | CampusError::NotFound { .. } => ExitCode::Data,

            CampusError::AccessDenied { .. }
            | CampusError::Compass(_)
            | CampusError::Io(_)
            | CampusError::Json(_)
            | CampusError::Toml(_)
            | CampusError::FailedOperation { .. }
            | CampusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable error type identifier used in JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            CampusError::UnknownFormat(_) => "unknown_format",
            CampusError::DuplicateFormat => "duplicate_format",
            CampusError::UsageError(_) => "usage_error",
            CampusError::SessionRequired => "session_required",
            CampusError::InvalidValue { .. } => "invalid_value",
            CampusError::Unsupported { .. } => "unsupported",
            CampusError::EntityNotFound { .. } => "entity_not_found",
            CampusError::InvalidCatalog { .. } => "invalid_catalog",
            CampusError::NotFound { .. } => "not_found",
            CampusError::AccessDenied { .. } => "access_denied",
            CampusError::Compass(_) => "compass_error",
            CampusError::Io(_) => "io_error",
            CampusError::Json(_) => "json_error",
            CampusError::Toml(_) => "toml_error",
            CampusError::FailedOperation { .. } => "failed_operation",
            CampusError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let CampusError::Compass(err) = self {
            error_obj["compass_error_type"] = serde_json::json!(err.kind.as_str());
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for campus operations
pub type Result<T> = std::result::Result<T, CampusError>;
