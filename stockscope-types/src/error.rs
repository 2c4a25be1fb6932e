use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the stockscope workspace.
///
/// This wraps capability mismatches, argument validation errors, connector-tagged
/// transport failures, non-success HTTP statuses, and not-found conditions.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScopeError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "profile").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, malformed payloads).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector failed at the transport level.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream API answered with a non-success HTTP status.
    #[error("{connector} returned status {status} for {what}")]
    Status {
        /// Connector name that received the response.
        connector: String,
        /// HTTP status code.
        status: u16,
        /// Description of the request, e.g. "profile for AAPL".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "profile for AAPL".
        what: String,
    },

    /// A request exceeded the configured timeout.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl ScopeError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Status` error for a non-success response.
    pub fn status(connector: impl Into<String>, status: u16, what: impl Into<String>) -> Self {
        Self::Status {
            connector: connector.into(),
            status,
            what: what.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true for errors that mean "nothing there" rather than "something broke".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Status { status: 404, .. }
        )
    }
}
