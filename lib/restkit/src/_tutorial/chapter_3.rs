//! # Chapter 3: Transport & Middleware
//!
//! Tune the transport and add cross-cutting behaviour with Tower layers.
//!
//! ## Feature Flags
//!
//! Enable middleware helpers in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! restkit = { version = "0.1", features = ["middleware-full"] }
//! ```
//!
//! ## Building a Transport
//!
//! ```ignore
//! let transport = HyperTransport::builder()
//!     .timeout(Duration::from_secs(10))
//!     .connect_timeout(Duration::from_secs(3))
//!     .with_logging()
//!     .with_retry(3)
//!     .build();
//! let client = ResourceClient::new(transport, config);
//! ```
//!
//! A timeout set through [`ClientConfig`](crate::ClientConfig) or
//! [`CallOptions`](crate::CallOptions) wins over the transport default.
//!
//! ## Available Middleware
//!
//! | Feature | Method | Description |
//! |---------|--------|-------------|
//! | `middleware-retry` | `.with_retry(n)` | Retry idempotent requests |
//! | `middleware-logging` | `.with_logging()` | Log exchanges |
//! | `middleware-concurrency` | `.with_concurrency_limit(n)` | Limit concurrent exchanges |
//!
//! ## Retry Rules
//!
//! Only GET, PUT and DELETE are retried, on connection errors, timeouts,
//! 5xx and 429. POST and PATCH go out exactly once: repeating them could
//! create a second resource or apply a change twice.
//!
//! ## Middleware Order
//!
//! The first layer added is the innermost. With `.with_logging().with_retry(3)`:
//!
//! ```text
//! Request → Retry → Logging → HTTP
//! Response ← Retry ← Logging ← HTTP
//! ```
//!
//! Logging then records every attempt. Swap the two calls to log only the
//! final result.
//!
//! ## Custom Middleware
//!
//! Any Tower `Layer` whose service maps `Request<Bytes>` to `Response<Bytes>`
//! with [`TransportError`](crate::TransportError) plugs in through
//! [`HyperTransportBuilder::layer`](crate::HyperTransportBuilder::layer).
//! Any other type implementing [`Transport`](crate::Transport) can replace
//! `HyperTransport` entirely, which is how the tests run without a network.
//!
//! ## Summary
//!
//! - Use feature flags to enable middleware helpers
//! - Per-call and per-client timeouts override the transport default
//! - Retries apply to idempotent methods only
//! - First added is innermost
