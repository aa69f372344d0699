//! Schema-less resources.
//!
//! A [`Resource`] is whatever JSON object the server returned for one item of
//! a collection. Nothing about its fields is assumed except the identity
//! field, whose name comes from the client configuration.

use std::fmt;

use bytes::Bytes;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Failure, JsonError};

/// JSON object used as a request body or held by a [`Resource`].
pub type Attributes = Map<String, Value>;

/// Ordered sequence of resources, as returned by the server.
pub type Collection = Vec<Resource>;

/// Serialize a typed value into an attribute map.
///
/// # Errors
///
/// Fails if serialization fails or if `value` does not serialize to a JSON
/// object.
///
/// # Example
///
/// ```
/// use restkit_core::to_attributes;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NewTodo { title: String, completed: bool }
///
/// let attributes = to_attributes(&NewTodo { title: "Buy milk".into(), completed: false })
///     .expect("object");
/// assert_eq!(attributes["title"], "Buy milk");
/// ```
pub fn to_attributes<T: Serialize>(value: &T) -> Result<Attributes, Failure> {
    match serde_json::to_value(value) {
        Ok(Value::Object(attributes)) => Ok(attributes),
        Ok(other) => Err(Failure::invalid_request(format!(
            "attributes must serialize to a JSON object, got {}",
            json_type(&other)
        ))),
        Err(error) => Err(Failure::invalid_request(format!(
            "cannot serialize attributes: {error}"
        ))),
    }
}

// ============================================================================
// Resource Identifier
// ============================================================================

/// Opaque identifier of a resource, used as a single URL path segment.
///
/// Numeric ids are carried as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref)]
#[display("{_0}")]
pub struct ResourceId(String);

impl ResourceId {
    /// Create an identifier from any text.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier from a JSON value: strings verbatim, integers as decimal.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(id) => Some(Self(id.clone())),
            Value::Number(id) if id.is_i64() || id.is_u64() => Some(Self(id.to_string())),
            _ => None,
        }
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}

macro_rules! resource_id_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for ResourceId {
                fn from(id: $int) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

resource_id_from_int!(u16, u32, u64, usize, i32, i64);

// ============================================================================
// Resource
// ============================================================================

/// One item of a collection, as decoded from the server's response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    attributes: Attributes,
}

impl Resource {
    /// Wrap an attribute map.
    #[must_use]
    pub const fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Field value by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    /// Identity under the given field name, if present and a string or integer.
    #[must_use]
    pub fn id_field(&self, field: &str) -> Option<ResourceId> {
        self.get(field).and_then(ResourceId::from_json)
    }

    /// Identity under the conventional `id` field.
    ///
    /// This always reads `id`, whatever identity field a client is
    /// configured with; use [`ClientConfig::identity`](crate::ClientConfig::identity)
    /// or [`Resource::id_field`] for other names.
    #[must_use]
    pub fn id(&self) -> Option<ResourceId> {
        self.id_field("id")
    }

    /// All fields.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Consume into the field map.
    #[must_use]
    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }

    /// Decode into a typed value, reporting the path of the first mismatch.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] if the fields do not match `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, JsonError> {
        crate::from_value(Value::Object(self.attributes.clone()))
    }

    /// Decode one resource from a success response body.
    pub(crate) fn decode(status: u16, body: Bytes) -> Result<Self, Failure> {
        match crate::from_json::<Value>(&body) {
            Ok(Value::Object(attributes)) => Ok(Self { attributes }),
            Ok(other) => {
                let error = JsonError::new(
                    ".",
                    format!("expected a JSON object, got {}", json_type(&other)),
                );
                Err(Failure::decode(status, body, &error))
            }
            Err(error) => Err(Failure::decode(status, body, &error)),
        }
    }

    /// Decode a collection from a success response body.
    pub(crate) fn decode_collection(status: u16, body: Bytes) -> Result<Collection, Failure> {
        crate::from_json::<Collection>(&body).map_err(|error| Failure::decode(status, body, &error))
    }
}

impl From<Attributes> for Resource {
    fn from(attributes: Attributes) -> Self {
        Self::new(attributes)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.attributes).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
