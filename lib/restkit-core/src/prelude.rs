//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use restkit_core::prelude::*;
//! ```

pub use crate::{
    Attributes, CallOptions, ClientConfig, Collection, Failure, FailureKind, Operation, Outcome,
    Payload, Resource, ResourceClient, ResourceId, Success, Transport, to_attributes,
};
