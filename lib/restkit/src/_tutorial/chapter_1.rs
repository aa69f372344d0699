//! # Chapter 1: Operations & Payloads
//!
//! The six operations and how payloads travel.
//!
//! ## The Operations
//!
//! | Operation | Method | Path | Success payload |
//! |-----------|--------|------|-----------------|
//! | `list(collection)` | GET | `/{collection}` | `Collection` |
//! | `get(collection, id)` | GET | `/{collection}/{id}` | `Resource` |
//! | `create(collection, attrs)` | POST | `/{collection}` | `Resource` with its new id |
//! | `replace(collection, id, attrs)` | PUT | `/{collection}/{id}` | `Resource` |
//! | `update(collection, id, attrs)` | PATCH | `/{collection}/{id}` | `Resource` |
//! | `delete(collection, id)` | DELETE | `/{collection}/{id}` | nothing |
//!
//! Collections may be nested (`"users/1/todos"`). The identifier always
//! becomes a single percent-encoded path segment.
//!
//! ## Attributes
//!
//! Request payloads are plain JSON objects:
//!
//! ```ignore
//! use restkit::prelude::*;
//! use serde_json::json;
//!
//! let serde_json::Value::Object(attrs) = json!({"userId": 1, "title": "Buy milk", "completed": false}) else {
//!     unreachable!()
//! };
//! let created = client.create("todos", &attrs).await?.into_payload();
//! println!("assigned id: {:?}", created.id());
//! ```
//!
//! `create` refuses attributes that already carry the identity field:
//! the server assigns it.
//!
//! ## Typed Payloads
//!
//! Convert from and to your own types at the edges:
//!
//! ```ignore
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Todo {
//!     #[serde(rename = "userId")]
//!     user_id: u64,
//!     title: String,
//!     completed: bool,
//! }
//!
//! let attrs = to_attributes(&Todo { user_id: 1, title: "Wash car".into(), completed: true })?;
//! let todo: Todo = client.replace("todos", 10, &attrs).await?.payload().parse()?;
//! ```
//!
//! ## Per-Call Options
//!
//! ```ignore
//! let options = CallOptions::new()
//!     .header("X-Request-Id", "req-42")
//!     .timeout(Duration::from_secs(2));
//! let outcome = client.perform(&Operation::get("todos", 1), &options).await;
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Outcomes][super::chapter_2] - Telling failures apart
