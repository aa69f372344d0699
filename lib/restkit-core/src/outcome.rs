//! Operation outcomes and the status taxonomy.
//!
//! Every resource operation returns an [`Outcome`]: a [`Success`] carrying the
//! decoded payload and the status code, or a [`Failure`] carrying its
//! [`FailureKind`], the status (when a response was received) and the raw body.

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use derive_more::Display;

use crate::{JsonError, Response, TransportError};

/// Result of one resource operation.
pub type Outcome<T> = std::result::Result<Success<T>, Failure>;

// ============================================================================
// Status classification
// ============================================================================

/// Class of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusClass {
    /// 200-299.
    #[display("success")]
    Success,
    /// 300-399.
    #[display("redirection")]
    Redirection,
    /// 400-499.
    #[display("client error")]
    ClientError,
    /// 500-599.
    #[display("server error")]
    ServerError,
    /// 1xx and anything outside 100-599.
    #[display("unexpected")]
    Unexpected,
}

impl StatusClass {
    /// Classify a status code. Total over `u16`.
    #[must_use]
    pub const fn of(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            300..=399 => Self::Redirection,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unexpected,
        }
    }

    /// The failure kind for this class, or `None` for [`StatusClass::Success`].
    #[must_use]
    pub const fn failure_kind(self) -> Option<FailureKind> {
        match self {
            Self::Success => None,
            Self::Redirection => Some(FailureKind::Redirection),
            Self::ClientError => Some(FailureKind::ClientError),
            Self::ServerError => Some(FailureKind::ServerError),
            Self::Unexpected => Some(FailureKind::Unexpected),
        }
    }
}

/// Turn a non-2xx response into a [`Failure`], passing 2xx responses through.
///
/// The raw body is attached to the failure untouched.
pub fn classify(response: Response<Bytes>) -> Result<Response<Bytes>, Failure> {
    match response.status_class().failure_kind() {
        None => Ok(response),
        Some(kind) => {
            let (status, _, body) = response.into_parts();
            Err(Failure::from_status(kind, status, body))
        }
    }
}

// ============================================================================
// Success
// ============================================================================

/// Successful outcome: the decoded payload, plus the status and headers of
/// the response that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    status: u16,
    headers: HashMap<String, String>,
    payload: T,
}

impl<T> Success<T> {
    /// Creates a new success with no headers.
    #[must_use]
    pub fn new(status: u16, payload: T) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            payload,
        }
    }

    /// Attach the response headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Canonical reason phrase of the status, e.g. `Created` for 201.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single response header value by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decoded payload.
    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume into the decoded payload.
    #[must_use]
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Transform the payload, keeping the status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            status: self.status,
            headers: self.headers,
            payload: f(self.payload),
        }
    }
}

// ============================================================================
// Failure
// ============================================================================

/// Kind of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FailureKind {
    /// The exchange never completed (connection, DNS, TLS, timeout).
    #[display("transport")]
    Transport,
    /// 3xx status; redirects are not followed.
    #[display("redirection")]
    Redirection,
    /// 4xx status.
    #[display("client error")]
    ClientError,
    /// 5xx status.
    #[display("server error")]
    ServerError,
    /// 1xx or out-of-range status.
    #[display("unexpected status")]
    Unexpected,
    /// Success status, but the body violated the JSON contract.
    #[display("decode error")]
    DecodeError,
    /// The request was rejected before any exchange took place.
    #[display("invalid request")]
    InvalidRequest,
}

/// A failed operation, with enough context for the caller to decide recovery.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct Failure {
    kind: FailureKind,
    status: Option<u16>,
    #[error(not(source))]
    body: Option<Bytes>,
    message: String,
}

impl Failure {
    /// Failure for a response whose status is outside the success range.
    #[must_use]
    pub fn from_status(kind: FailureKind, status: u16, body: Bytes) -> Self {
        let message = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("unknown status")
            .to_string();
        Self {
            kind,
            status: Some(status),
            body: Some(body),
            message,
        }
    }

    /// Failure for a success response whose body could not be decoded.
    #[must_use]
    pub fn decode(status: u16, body: Bytes, error: &JsonError) -> Self {
        Self {
            kind: FailureKind::DecodeError,
            status: Some(status),
            body: Some(body),
            message: error.to_string(),
        }
    }

    /// Failure for a request rejected before reaching the transport.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::InvalidRequest,
            status: None,
            body: None,
            message: message.into(),
        }
    }

    /// Kind of failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// HTTP status, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Raw response body, when a response was received.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Human-readable detail.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the exchange never completed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self.kind, FailureKind::Transport)
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.kind, FailureKind::ClientError)
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.kind, FailureKind::ServerError)
    }

    /// Returns `true` if the body of a success response could not be decoded.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self.kind, FailureKind::DecodeError)
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// Raw body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.body
            .as_ref()
            .map(|body| String::from_utf8_lossy(body).into_owned())
    }

    /// Try to decode the raw body as JSON, e.g. a validation report on a 422.
    ///
    /// Returns `None` if no response body was received.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct Violation {
    ///     field: String,
    ///     message: String,
    /// }
    ///
    /// match client.create("todos", attributes).await {
    ///     Ok(created) => println!("created {:?}", created.payload().id()),
    ///     Err(failure) if failure.is_client_error() => {
    ///         if let Some(Ok(violations)) = failure.decode_body::<Vec<Violation>>() {
    ///             println!("rejected: {violations:?}");
    ///         }
    ///     }
    ///     Err(failure) => println!("failed: {failure}"),
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T, JsonError>> {
        self.body.as_ref().map(|body| crate::from_json(body))
    }
}

impl From<TransportError> for Failure {
    fn from(error: TransportError) -> Self {
        Self {
            kind: FailureKind::Transport,
            status: None,
            body: None,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (HTTP {status}): {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}
