//! Generic JSON REST resource client.
//!
//! Talk to any collection-oriented REST API with six operations (list, get,
//! create, replace, update, delete), schema-less payloads and classified
//! outcomes, over a pooled hyper transport with Tower middleware.
//!
//! # Example
//!
//! ```ignore
//! use restkit::prelude::*;
//!
//! let config = ClientConfig::new("https://jsonplaceholder.typicode.com")?;
//! let client = ResourceClient::new(HyperTransport::new(), config);
//!
//! let todo = client.get("todos", 1).await?;
//! println!("{}", todo.payload());
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;

// Re-export transport types
pub use client::{BoxedService, HyperTransport, HyperTransportBuilder, ServiceFuture};
pub use config::{TransportConfig, TransportConfigBuilder};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use restkit_core::{
    Attributes, CallOptions, ClientConfig, ClientConfigBuilder, Collection, ConfigError,
    ContentType, DEFAULT_ID_FIELD, Failure, FailureKind, Intent, JsonError, Method, Operation,
    Outcome, Payload, Request, RequestBuilder, Resource, ResourceClient, ResourceId, Response,
    StatusClass, Success, Transport, TransportError, classify, from_json, from_value,
    to_attributes, to_json,
};

// Re-export http types for status codes and headers
pub use restkit_core::{StatusCode, header};

// Re-export crates that appear in the public API
pub use serde_json;
pub use url;
