//! Request intents and their response contracts.
//!
//! Each [`Intent`] fixes the HTTP method, the endpoint shape and what a
//! success response must contain. [`Operation`] pairs an intent with the data
//! it needs, and [`Intent::interpret`] is the single classification function
//! every response goes through.

use bytes::Bytes;
use derive_more::Display;

use crate::{
    Attributes, Collection, Failure, Method, Outcome, Resource, ResourceId, Response, Success,
    classify,
};

/// What an operation is meant to do to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Intent {
    /// `GET /collection`.
    #[display("list")]
    List,
    /// `GET /collection/{id}`.
    #[display("get")]
    Get,
    /// `POST /collection`.
    #[display("create")]
    Create,
    /// `PUT /collection/{id}`, full overwrite.
    #[display("replace")]
    Replace,
    /// `PATCH /collection/{id}`, changed fields only.
    #[display("update")]
    Update,
    /// `DELETE /collection/{id}`.
    #[display("delete")]
    Delete,
}

impl Intent {
    /// HTTP method bound to the intent.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::List | Self::Get => Method::Get,
            Self::Create => Method::Post,
            Self::Replace => Method::Put,
            Self::Update => Method::Patch,
            Self::Delete => Method::Delete,
        }
    }

    /// Returns `true` if the endpoint is `/collection/{id}`.
    #[must_use]
    pub const fn targets_item(self) -> bool {
        !matches!(self, Self::List | Self::Create)
    }

    /// Returns `true` if the request carries a JSON body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        self.method().has_body()
    }

    /// Returns `true` if a success response must carry a JSON payload.
    #[must_use]
    pub const fn expects_payload(self) -> bool {
        !matches!(self, Self::Delete)
    }

    /// Classify a response and decode its payload.
    ///
    /// `id_field` is only consulted for [`Intent::Create`], whose response
    /// must carry the server-assigned identity.
    pub fn interpret(self, response: Response<Bytes>, id_field: &str) -> Outcome<Payload> {
        match self {
            Self::List => expect_collection(response).map(|success| success.map(Payload::Collection)),
            Self::Get | Self::Replace | Self::Update => {
                expect_resource(response, None).map(|success| success.map(Payload::Resource))
            }
            Self::Create => {
                expect_resource(response, Some(id_field)).map(|success| success.map(Payload::Resource))
            }
            Self::Delete => expect_empty(response).map(|success| success.map(|()| Payload::Empty)),
        }
    }
}

/// Decoded payload of a success, shaped by the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// One resource (get, create, replace, update).
    Resource(Resource),
    /// A collection (list).
    Collection(Collection),
    /// No payload (delete).
    Empty,
}

impl Payload {
    /// The resource, if this payload is one.
    #[must_use]
    pub fn into_resource(self) -> Option<Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    /// The collection, if this payload is one.
    #[must_use]
    pub fn into_collection(self) -> Option<Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Returns `true` for the empty payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

pub(crate) fn expect_collection(response: Response<Bytes>) -> Outcome<Collection> {
    let (status, headers, body) = classify(response)?.into_parts();
    let collection = Resource::decode_collection(status, body)?;
    Ok(Success::new(status, collection).with_headers(headers))
}

pub(crate) fn expect_resource(response: Response<Bytes>, identity: Option<&str>) -> Outcome<Resource> {
    let (status, headers, body) = classify(response)?.into_parts();
    let resource = Resource::decode(status, body.clone())?;
    // Any non-null value counts: the identity is opaque here
    if let Some(field) = identity
        && resource.get(field).is_none_or(serde_json::Value::is_null)
    {
        let error = crate::JsonError::new(
            field,
            format!("response has no value for the server-assigned identity field `{field}`"),
        );
        return Err(Failure::decode(status, body, &error));
    }
    Ok(Success::new(status, resource).with_headers(headers))
}

pub(crate) fn expect_empty(response: Response<Bytes>) -> Outcome<()> {
    let (status, headers, _) = classify(response)?.into_parts();
    Ok(Success::new(status, ()).with_headers(headers))
}

// ============================================================================
// Operation
// ============================================================================

/// An intent together with the data it needs.
///
/// # Example
///
/// ```
/// use restkit_core::{Intent, Method, Operation};
///
/// let operation = Operation::get("todos", 10_u64);
/// assert_eq!(operation.intent(), Intent::Get);
/// assert_eq!(operation.intent().method(), Method::Get);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// List a collection.
    List {
        /// Collection path, e.g. `todos`.
        collection: String,
    },
    /// Fetch one resource.
    Get {
        /// Collection path.
        collection: String,
        /// Resource identity.
        id: ResourceId,
    },
    /// Create a resource; the server assigns its identity.
    Create {
        /// Collection path.
        collection: String,
        /// Attributes of the new resource, without identity.
        attributes: Attributes,
    },
    /// Overwrite a resource with a complete attribute set.
    Replace {
        /// Collection path.
        collection: String,
        /// Resource identity.
        id: ResourceId,
        /// Complete attribute set; omitted fields may be lost server-side.
        attributes: Attributes,
    },
    /// Change some fields of a resource.
    Update {
        /// Collection path.
        collection: String,
        /// Resource identity.
        id: ResourceId,
        /// Only the changed fields.
        attributes: Attributes,
    },
    /// Remove a resource.
    Delete {
        /// Collection path.
        collection: String,
        /// Resource identity.
        id: ResourceId,
    },
}

impl Operation {
    /// `list` operation.
    #[must_use]
    pub fn list(collection: impl Into<String>) -> Self {
        Self::List {
            collection: collection.into(),
        }
    }

    /// `get` operation.
    #[must_use]
    pub fn get(collection: impl Into<String>, id: impl Into<ResourceId>) -> Self {
        Self::Get {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// `create` operation.
    #[must_use]
    pub fn create(collection: impl Into<String>, attributes: Attributes) -> Self {
        Self::Create {
            collection: collection.into(),
            attributes,
        }
    }

    /// `replace` operation.
    #[must_use]
    pub fn replace(
        collection: impl Into<String>,
        id: impl Into<ResourceId>,
        attributes: Attributes,
    ) -> Self {
        Self::Replace {
            collection: collection.into(),
            id: id.into(),
            attributes,
        }
    }

    /// `update` operation.
    #[must_use]
    pub fn update(
        collection: impl Into<String>,
        id: impl Into<ResourceId>,
        attributes: Attributes,
    ) -> Self {
        Self::Update {
            collection: collection.into(),
            id: id.into(),
            attributes,
        }
    }

    /// `delete` operation.
    #[must_use]
    pub fn delete(collection: impl Into<String>, id: impl Into<ResourceId>) -> Self {
        Self::Delete {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Intent of the operation.
    #[must_use]
    pub const fn intent(&self) -> Intent {
        match self {
            Self::List { .. } => Intent::List,
            Self::Get { .. } => Intent::Get,
            Self::Create { .. } => Intent::Create,
            Self::Replace { .. } => Intent::Replace,
            Self::Update { .. } => Intent::Update,
            Self::Delete { .. } => Intent::Delete,
        }
    }

    /// Collection path.
    #[must_use]
    pub fn collection(&self) -> &str {
        match self {
            Self::List { collection }
            | Self::Get { collection, .. }
            | Self::Create { collection, .. }
            | Self::Replace { collection, .. }
            | Self::Update { collection, .. }
            | Self::Delete { collection, .. } => collection,
        }
    }

    /// Resource identity, for item operations.
    #[must_use]
    pub const fn id(&self) -> Option<&ResourceId> {
        match self {
            Self::List { .. } | Self::Create { .. } => None,
            Self::Get { id, .. }
            | Self::Replace { id, .. }
            | Self::Update { id, .. }
            | Self::Delete { id, .. } => Some(id),
        }
    }

    /// Request body attributes, for operations that carry one.
    #[must_use]
    pub const fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::List { .. } | Self::Get { .. } | Self::Delete { .. } => None,
            Self::Create { attributes, .. }
            | Self::Replace { attributes, .. }
            | Self::Update { attributes, .. } => Some(attributes),
        }
    }
}
