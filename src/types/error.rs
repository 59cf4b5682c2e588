//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Taxonomy
//!
//! - **Network**: request could not be sent or no response received
//! - **Upstream**: non-success status from a dependent service
//! - **Schema**: response succeeded but did not match the expected shape
//! - **Precondition**: local state makes the action invalid
//!
//! ## Design Principles
//!
//! - Single unified error type (`Error`) for the entire application
//! - No automatic retries anywhere: every gateway call is one best-effort
//!   round trip, and the caller surfaces the failure to the user
//! - No panic/unwrap in non-test code - all errors are recoverable

use thiserror::Error;

// =============================================================================
// Error Kinds
// =============================================================================

/// Coarse error families used to route a failure to the right
/// user-facing message slot in the editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request never completed (DNS, connect, timeout, body read)
    Network,
    /// Dependent service answered with a non-success status
    Upstream,
    /// Response parsed but its shape was wrong
    Schema,
    /// Local state made the action invalid before any I/O
    Precondition,
    /// Everything local: config, filesystem, export
    Local,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "NETWORK"),
            Self::Upstream => write!(f, "UPSTREAM"),
            Self::Schema => write!(f, "SCHEMA"),
            Self::Precondition => write!(f, "PRECONDITION"),
            Self::Local => write!(f, "LOCAL"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum Error {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Gateway Errors
    // -------------------------------------------------------------------------
    /// The request could not be sent or no response was received.
    #[error("Network error calling {service}: {message}")]
    Network { service: String, message: String },

    /// The dependent service answered with a non-success status. The
    /// status and body are carried verbatim for the caller to surface.
    #[error("{service} returned {status}: {body}")]
    Upstream {
        service: String,
        status: u16,
        body: String,
    },

    /// The response was syntactically valid but did not match the
    /// expected shape.
    #[error("Unexpected {service} response shape: {message}")]
    Schema { service: String, message: String },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Local state makes the requested action invalid; checked before
    /// any network call is issued.
    #[error("{0}")]
    Precondition(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(String),
}

impl Error {
    /// Create a network error for a named service
    pub fn network(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Create an upstream error carrying the status and body verbatim
    pub fn upstream(service: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a schema error for a named service
    pub fn schema(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Wrap a transport failure from reqwest for a named service
    pub fn transport(service: impl Into<String>, err: reqwest::Error) -> Self {
        Self::Network {
            service: service.into(),
            message: err.to_string(),
        }
    }

    /// The coarse family this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::Schema { .. } | Self::Json(_) => ErrorKind::Schema,
            Self::Precondition(_) => ErrorKind::Precondition,
            Self::Io(_) | Self::Config(_) | Self::Export(_) => ErrorKind::Local,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_routing() {
        assert_eq!(Error::network("serp", "dns").kind(), ErrorKind::Network);
        assert_eq!(Error::upstream("serp", 401, "").kind(), ErrorKind::Upstream);
        assert_eq!(Error::schema("openai", "h2").kind(), ErrorKind::Schema);
        assert_eq!(
            Error::Precondition("empty outline".into()).kind(),
            ErrorKind::Precondition
        );
        assert_eq!(
            Error::Config("bad timeout".into()).kind(),
            ErrorKind::Local
        );
    }

    #[test]
    fn test_upstream_display_carries_status_and_body() {
        let err = Error::upstream("serp", 404, "no such engine");
        assert_eq!(err.to_string(), "serp returned 404: no such engine");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Network.to_string(), "NETWORK");
        assert_eq!(ErrorKind::Upstream.to_string(), "UPSTREAM");
        assert_eq!(ErrorKind::Schema.to_string(), "SCHEMA");
    }
}
