//! Body serialization utilities.

use bytes::Bytes;

use crate::JsonError;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use restkit_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Todo { title: String }
///
/// let todo = Todo { title: "Buy milk".to_string() };
/// let bytes = to_json(&todo).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"title":"Buy milk"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes, serde_json::Error> {
    serde_json::to_vec(value).map(Bytes::from)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact path to the field
/// that failed to deserialize.
///
/// # Errors
///
/// Returns a [`JsonError`] carrying the path (e.g. `[2].title`) and the
/// underlying message.
///
/// # Example
///
/// ```
/// use restkit_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Todo { title: String }
///
/// let todo: Todo = from_json(br#"{"title":"Buy milk"}"#).expect("deserialize");
/// assert_eq!(todo, Todo { title: "Buy milk".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, JsonError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| JsonError::new(e.path().to_string(), e.inner().to_string()))?;
    deserializer
        .end()
        .map_err(|e| JsonError::new(".", e.to_string()))?;
    Ok(value)
}

/// Deserialize an already-parsed JSON value with path-aware error messages.
///
/// # Errors
///
/// Returns a [`JsonError`] if `value` does not match `T`.
pub fn from_value<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, JsonError> {
    serde_path_to_error::deserialize(value)
        .map_err(|e| JsonError::new(e.path().to_string(), e.inner().to_string()))
}
