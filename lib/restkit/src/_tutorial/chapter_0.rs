//! # Chapter 0: Getting Started
//!
//! Your first restkit resource client in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Configure a [`ClientConfig`](crate::ClientConfig) with a base URL
//! - Pair it with a [`HyperTransport`](crate::HyperTransport)
//! - List a collection and fetch one resource
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! restkit = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Your First Client
//!
//! ```ignore
//! use restkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://jsonplaceholder.typicode.com")?;
//!     let client = ResourceClient::new(HyperTransport::new(), config);
//!
//!     let todos = client.list("todos").await?;
//!     println!("{} todos", todos.payload().len());
//!
//!     let todo = client.get("todos", 1).await?;
//!     println!("first: {}", todo.payload());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Fits Together
//!
//! ```text
//! ResourceClient ── Request ──→ Transport ── HTTP ──→ server
//!       ↑                           │
//!    Outcome  ←── classify ←── Response
//! ```
//!
//! - `ClientConfig` - base URL, default headers, timeout, identity field
//! - `ResourceClient` - builds one request per operation and classifies the reply
//! - `HyperTransport` - performs the exchange (pooling, TLS, timeouts)
//!
//! The client never inspects a resource's fields beyond its identity field,
//! so one client serves every collection on the server.
//!
//! ## Next Steps
//!
//! - [Chapter 1: Operations & Payloads][super::chapter_1] - create, replace, update, delete
