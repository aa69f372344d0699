//! Tower middleware layers for the restkit transport.
//!
//! Layers wrap [`HyperTransport`](crate::HyperTransport) through Tower's
//! `Layer` trait, so they act on raw exchanges and never on resource
//! semantics. The last layer added is the first to see a request.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `middleware-retry` | `.with_retry()` helper |
//! | `middleware-logging` | `.with_logging()` helper |
//! | `middleware-concurrency` | `.with_concurrency_limit()` helper |
//! | `middleware-full` | All middleware |
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs exchanges using `tracing`
//! - [`RetryPolicy`] - Idempotent-only policy for [`RetryLayer`]
//! - [`ConcurrencyLimitLayer`] - Limits concurrent exchanges
//!
//! # Example
//!
//! ```ignore
//! use restkit::HyperTransport;
//! use restkit::middleware::{LoggingLayer, RetryLayer, RetryPolicy};
//!
//! // Helper methods (feature-gated)
//! let transport = HyperTransport::builder()
//!     .with_retry(3)
//!     .with_logging()
//!     .build();
//!
//! // Raw layer access (always available)
//! let transport = HyperTransport::builder()
//!     .layer(RetryLayer::new(RetryPolicy::new(2)))
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod logging;
mod retry;

pub use logging::{LogLevel, Logging, LoggingLayer};
pub use retry::RetryPolicy;

pub use tower::{Layer, ServiceBuilder};

pub use tower::limit::ConcurrencyLimitLayer;
pub use tower::retry::RetryLayer;
