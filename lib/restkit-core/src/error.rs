//! Error types for restkit.
//!
//! Operation outcomes use [`Failure`](crate::Failure); the types here cover
//! the layers around it: the transport exchange, client configuration and
//! JSON decoding.

use derive_more::{Display, Error, From};

// ============================================================================
// Transport Error
// ============================================================================

/// Failure of a single exchange at the transport level.
///
/// The exchange never completed, so there is no status code and no body.
#[derive(Debug, Display, Error)]
pub enum TransportError {
    /// Network/connection errors, including DNS resolution failures.
    #[display("connection error: {_0}")]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    Tls(#[error(not(source))] String),

    /// The exchange did not complete before the timeout.
    #[display("request timeout")]
    Timeout,

    /// The request could not be turned into a wire request.
    #[display("invalid request: {_0}")]
    InvalidRequest(#[error(not(source))] String),
}

impl TransportError {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

// ============================================================================
// Configuration Error
// ============================================================================

/// Error raised while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[display("invalid base URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The base URL parsed but cannot carry path segments (e.g. `mailto:`).
    #[display("base URL cannot be a base: {_0}")]
    #[from(skip)]
    CannotBeABase(#[error(not(source))] String),

    /// The identity field name is empty.
    #[display("identity field name must not be empty")]
    #[from(skip)]
    EmptyIdField,
}

// ============================================================================
// JSON Error
// ============================================================================

/// JSON deserialization error with path context.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("JSON deserialization error at '{path}': {message}")]
pub struct JsonError {
    path: String,
    message: String,
}

impl JsonError {
    /// Create a JSON error from a path (e.g. `[0].title`) and a message.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path to the value that failed to decode.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Underlying decoder message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
