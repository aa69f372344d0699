//! The resource client.
//!
//! [`ResourceClient`] turns one CRUD operation into exactly one
//! [`Transport`] exchange and classifies the result. It never retries, never
//! caches and never follows redirects.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{Instrument, Level, debug, span, warn};

use crate::intent::{expect_collection, expect_empty, expect_resource};
use crate::{
    Attributes, CallOptions, ClientConfig, Collection, ContentType, Failure, Intent, Operation,
    Outcome, Payload, Request, Resource, ResourceId, Response, Transport,
};

/// Generic client for the CRUD resources of a JSON REST service.
///
/// Cheap to clone and safe to share between tasks: the only state is the
/// transport and the immutable configuration.
///
/// # Example
///
/// ```ignore
/// use restkit::{ClientConfig, HyperTransport, ResourceClient};
/// use serde_json::json;
///
/// let config = ClientConfig::new("https://jsonplaceholder.typicode.com")?;
/// let client = ResourceClient::new(HyperTransport::new(), config);
///
/// let todos = client.list("todos").await?.into_payload();
/// let todo = client.get("todos", 1).await?.into_payload();
///
/// let serde_json::Value::Object(patch) = json!({ "completed": true }) else { unreachable!() };
/// let updated = client.update("todos", 10, &patch).await?;
/// ```
#[derive(Debug)]
pub struct ResourceClient<T> {
    transport: T,
    config: Arc<ClientConfig>,
}

impl<T: Clone> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T> ResourceClient<T> {
    /// Create a client over the given transport.
    #[must_use]
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    /// Client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the client and return the transport.
    #[must_use]
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: Transport> ResourceClient<T> {
    /// `GET /{collection}`.
    pub async fn list(&self, collection: &str) -> Outcome<Collection> {
        let response = self
            .send(Intent::List, collection, None, None, &CallOptions::default())
            .await?;
        expect_collection(response)
    }

    /// `GET /{collection}/{id}`.
    pub async fn get(&self, collection: &str, id: impl Into<ResourceId>) -> Outcome<Resource> {
        let id = id.into();
        let response = self
            .send(Intent::Get, collection, Some(&id), None, &CallOptions::default())
            .await?;
        expect_resource(response, None)
    }

    /// `POST /{collection}` with `attributes` as the JSON body.
    ///
    /// `attributes` must not contain the identity field; the returned resource
    /// carries the identity assigned by the server.
    pub async fn create(&self, collection: &str, attributes: &Attributes) -> Outcome<Resource> {
        let response = self
            .send(
                Intent::Create,
                collection,
                None,
                Some(attributes),
                &CallOptions::default(),
            )
            .await?;
        expect_resource(response, Some(&self.config.id_field))
    }

    /// `PUT /{collection}/{id}` with the complete attribute set.
    ///
    /// The body is sent exactly as given. Any field the resource defines but
    /// `attributes` omits may be reset by the server.
    pub async fn replace(
        &self,
        collection: &str,
        id: impl Into<ResourceId>,
        attributes: &Attributes,
    ) -> Outcome<Resource> {
        let id = id.into();
        let response = self
            .send(
                Intent::Replace,
                collection,
                Some(&id),
                Some(attributes),
                &CallOptions::default(),
            )
            .await?;
        expect_resource(response, None)
    }

    /// `PATCH /{collection}/{id}` with only the changed fields.
    pub async fn update(
        &self,
        collection: &str,
        id: impl Into<ResourceId>,
        partial: &Attributes,
    ) -> Outcome<Resource> {
        let id = id.into();
        let response = self
            .send(
                Intent::Update,
                collection,
                Some(&id),
                Some(partial),
                &CallOptions::default(),
            )
            .await?;
        expect_resource(response, None)
    }

    /// `DELETE /{collection}/{id}`.
    ///
    /// Any success status (200 and 204 alike) yields an empty payload,
    /// whatever the body.
    pub async fn delete(&self, collection: &str, id: impl Into<ResourceId>) -> Outcome<()> {
        let id = id.into();
        let response = self
            .send(Intent::Delete, collection, Some(&id), None, &CallOptions::default())
            .await?;
        expect_empty(response)
    }

    /// Run any operation with per-call options.
    pub async fn perform(&self, operation: &Operation, options: &CallOptions) -> Outcome<Payload> {
        let intent = operation.intent();
        let response = self
            .send(
                intent,
                operation.collection(),
                operation.id(),
                operation.attributes(),
                options,
            )
            .await?;
        intent.interpret(response, &self.config.id_field)
    }

    /// Build the request for an intent.
    ///
    /// Nothing is sent: a request that cannot be built fails as
    /// [`FailureKind::InvalidRequest`](crate::FailureKind::InvalidRequest).
    pub fn build_request(
        &self,
        intent: Intent,
        collection: &str,
        id: Option<&ResourceId>,
        attributes: Option<&Attributes>,
        options: &CallOptions,
    ) -> Result<Request<Bytes>, Failure> {
        let id = match (intent.targets_item(), id) {
            (true, Some(id)) => Some(id),
            (true, None) => {
                return Err(Failure::invalid_request(format!(
                    "{intent} needs a resource id"
                )));
            }
            (false, _) => None,
        };
        let url = self.config.endpoint(collection, id)?;

        let mut builder = Request::builder(intent.method(), url)
            .header(http::header::ACCEPT.as_str(), ContentType::Json.as_str())
            .headers(self.config.default_headers.clone())
            .headers(options.headers.clone());
        if let Some(timeout) = options.timeout.or(self.config.timeout) {
            builder = builder.timeout(timeout);
        }

        if intent.has_body() {
            let attributes = attributes.ok_or_else(|| {
                Failure::invalid_request(format!("{intent} needs a JSON body"))
            })?;
            if intent == Intent::Create && attributes.contains_key(&self.config.id_field) {
                return Err(Failure::invalid_request(format!(
                    "create attributes must not contain the server-assigned `{}` field",
                    self.config.id_field
                )));
            }
            builder = builder.json(attributes).map_err(|error| {
                Failure::invalid_request(format!("cannot serialize attributes: {error}"))
            })?;
        }

        Ok(builder.build())
    }

    async fn send(
        &self,
        intent: Intent,
        collection: &str,
        id: Option<&ResourceId>,
        attributes: Option<&Attributes>,
        options: &CallOptions,
    ) -> Result<Response<Bytes>, Failure> {
        let request = self
            .build_request(intent, collection, id, attributes, options)
            .inspect_err(|failure| warn!(%intent, collection, %failure, "request rejected"))?;

        let method = request.method();
        let url = request.url().to_string();
        let span = span!(Level::DEBUG, "resource_operation", %intent, %method, %url);

        async move {
            debug!("sending request");
            match self.transport.exchange(request).await {
                Ok(response) => {
                    debug!(status = response.status(), "response received");
                    Ok(response)
                }
                Err(error) => {
                    warn!(%error, "exchange failed");
                    Err(Failure::from(error))
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use assert2::{check, let_assert};
    use serde_json::{Value, json};

    use super::*;
    use crate::{FailureKind, Method, TransportError};

    /// Transport answering every request with one canned response.
    struct Canned(Result<(u16, &'static str), fn() -> TransportError>);

    impl Transport for Canned {
        async fn exchange(&self, _request: Request<Bytes>) -> Result<Response<Bytes>, TransportError> {
            match &self.0 {
                Ok((status, body)) => Ok(Response::new(
                    *status,
                    HashMap::new(),
                    Bytes::from_static(body.as_bytes()),
                )),
                Err(error) => Err(error()),
            }
        }
    }

    fn client(status: u16, body: &'static str) -> ResourceClient<Canned> {
        let config = ClientConfig::new("https://jsonplaceholder.typicode.com").expect("config");
        ResourceClient::new(Canned(Ok((status, body))), config)
    }

    fn attributes(value: Value) -> Attributes {
        let_assert!(Value::Object(map) = value);
        map
    }

    #[test]
    fn build_list_request() {
        let client = client(200, "[]");
        let_assert!(
            Ok(request) = client.build_request(Intent::List, "todos", None, None, &CallOptions::new())
        );

        check!(request.method() == Method::Get);
        check!(request.url().as_str() == "https://jsonplaceholder.typicode.com/todos");
        check!(request.body().is_none());
        check!(request.header("Content-Type").is_none());
        check!(request.header("Accept") == Some("application/json"));
    }

    #[test]
    fn build_get_request_ignores_attributes() {
        let client = client(200, "{}");
        let id = ResourceId::from(1_u64);
        let body = attributes(json!({ "ignored": true }));
        let_assert!(
            Ok(request) = client.build_request(Intent::Get, "todos", Some(&id), Some(&body), &CallOptions::new())
        );

        check!(request.url().path() == "/todos/1");
        check!(request.body().is_none());
    }

    #[test]
    fn build_write_request_sets_json_content_type() {
        let client = client(200, "{}");
        let id = ResourceId::from(10_u64);
        let body = attributes(json!({ "title": "Wash car" }));
        for intent in [Intent::Replace, Intent::Update] {
            let_assert!(
                Ok(request) = client.build_request(intent, "todos", Some(&id), Some(&body), &CallOptions::new())
            );
            check!(request.method() == intent.method());
            check!(request.header("content-type") == Some("application/json"));
            check!(request.body().map(AsRef::as_ref) == Some(br#"{"title":"Wash car"}"#.as_slice()));
        }
    }

    #[test]
    fn build_request_requires_id_for_item_intents() {
        let client = client(200, "{}");
        let_assert!(Err(failure) = client.build_request(Intent::Delete, "todos", None, None, &CallOptions::new()));
        check!(failure.kind() == FailureKind::InvalidRequest);
    }

    #[test]
    fn build_create_rejects_identity_field() {
        let client = client(201, "{}");
        let body = attributes(json!({ "id": 5, "title": "x" }));
        let_assert!(
            Err(failure) = client.build_request(Intent::Create, "todos", None, Some(&body), &CallOptions::new())
        );
        check!(failure.kind() == FailureKind::InvalidRequest);
        check!(failure.status().is_none());
    }

    #[test]
    fn call_options_override_defaults() {
        let config = ClientConfig::builder("https://api.example.com")
            .default_header("X-Tenant", "default")
            .default_header("X-Client", "restkit")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("config");
        let client = ResourceClient::new(Canned(Ok((200, "[]"))), config);
        let options = CallOptions::new()
            .header("x-tenant", "acme")
            .timeout(Duration::from_secs(2));

        let_assert!(Ok(request) = client.build_request(Intent::List, "todos", None, None, &options));
        check!(request.header("X-Tenant") == Some("acme"));
        check!(request.header("X-Client") == Some("restkit"));
        check!(request.timeout() == Some(Duration::from_secs(2)));

        let_assert!(Ok(request) = client.build_request(Intent::List, "todos", None, None, &CallOptions::new()));
        check!(request.header("X-Tenant") == Some("default"));
        check!(request.timeout() == Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn transport_failure_has_no_status_or_body() {
        let config = ClientConfig::new("https://jsonplaceholder.typicode.com").expect("config");
        let client = ResourceClient::new(Canned(Err(|| TransportError::Timeout)), config);

        let_assert!(Err(failure) = client.get("todos", 1).await);
        check!(failure.kind() == FailureKind::Transport);
        check!(failure.status().is_none());
        check!(failure.body().is_none());
    }

    #[tokio::test]
    async fn redirect_is_not_followed() {
        let_assert!(Err(failure) = client(301, "").list("todos").await);
        check!(failure.kind() == FailureKind::Redirection);
        check!(failure.status() == Some(301));
    }

    #[tokio::test]
    async fn perform_delete_yields_empty_payload() {
        let client = client(204, "");
        let_assert!(Ok(success) = client.perform(&Operation::delete("todos", 10_u64), &CallOptions::new()).await);
        check!(success.status() == 204);
        check!(*success.payload() == Payload::Empty);
    }

    #[test]
    fn client_is_clone_send_sync() {
        fn assert_traits<C: Clone + Send + Sync>() {}
        assert_traits::<ResourceClient<Arc<Canned>>>();
    }
}
