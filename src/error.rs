//! Error types for the admin clients.
//!
//! Validation errors are raised locally before anything reaches the
//! executor; transport, remote and serialization errors come from an
//! executed request.

use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Parameter or configuration key that caused the error (e.g., "topicName", "service_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "parameter_validator", "request_builder")
    pub source: Option<String>,
    /// Operation the error was raised for (e.g., "createTopic")
    pub operation_id: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_operation(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }
}

/// Unified error type for the admin clients.
///
/// Validation and configuration errors are raised locally. Everything the
/// executor reports (`Transport`, `Remote`) is passed through untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Remote error: HTTP {status} {status_text}: {message}")]
    Remote {
        status: u16,
        status_text: String,
        message: String,
        retryable: bool,
        retry_after_ms: Option<u64>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref op) = ctx.operation_id {
        parts.push(format!("operation: {}", op));
    }
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// True for errors raised before any request reached the executor.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// HTTP status reported by the service, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_leads_with_reason() {
        let err = Error::validation_with_context(
            "Missing required parameters: topicName",
            ErrorContext::new()
                .with_field_path("topicName")
                .with_source("parameter_validator"),
        );
        let text = err.to_string();
        assert!(text.starts_with("Missing required parameters: topicName"));
        assert!(text.contains("field: topicName"));
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn remote_error_exposes_status() {
        let err = Error::Remote {
            status: 404,
            status_text: "Not Found".into(),
            message: "topic not found".into(),
            retryable: false,
            retry_after_ms: None,
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.context().is_none());
        assert_eq!(err.to_string(), "Remote error: HTTP 404 Not Found: topic not found");
    }

    #[test]
    fn empty_context_adds_nothing() {
        let err = Error::configuration("service URL is required");
        assert_eq!(err.to_string(), "Configuration error: service URL is required");
    }
}
