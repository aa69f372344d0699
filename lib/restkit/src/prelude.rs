//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use restkit::prelude::*;
//! ```

pub use crate::{
    Attributes, CallOptions, ClientConfig, Collection, Failure, FailureKind, HyperTransport,
    Operation, Outcome, Payload, Resource, ResourceClient, ResourceId, Success, Transport,
    to_attributes,
};
