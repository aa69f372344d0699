//! Core types and the resource client for restkit.
//!
//! This crate is transport-agnostic. It provides:
//! - [`ResourceClient`] - list/get/create/replace/update/delete against a collection
//! - [`Transport`] - the single-exchange port the client sends requests through
//! - [`Outcome`], [`Success`], [`Failure`] and [`FailureKind`] - classified results
//! - [`Resource`], [`Collection`], [`Attributes`] and [`ResourceId`] - schema-less payloads
//! - [`Intent`], [`Operation`] and [`Payload`] - operation descriptions
//! - [`ClientConfig`] and [`CallOptions`] - base URL, default headers, timeouts
//! - [`Method`], [`Request`], [`RequestBuilder`] and [`Response`] - HTTP values
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod client;
mod config;
mod error;
mod intent;
mod method;
mod outcome;
pub mod prelude;
mod request;
mod resource;
mod response;
mod transport;

pub use body::{ContentType, from_json, from_value, to_json};
pub use client::ResourceClient;
pub use config::{CallOptions, ClientConfig, ClientConfigBuilder, DEFAULT_ID_FIELD};
pub use error::{ConfigError, JsonError, TransportError};
pub use intent::{Intent, Operation, Payload};
pub use method::Method;
pub use outcome::{Failure, FailureKind, Outcome, StatusClass, Success, classify};
pub use request::{Request, RequestBuilder};
pub use resource::{Attributes, Collection, Resource, ResourceId, to_attributes};
pub use response::Response;
pub use transport::Transport;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
