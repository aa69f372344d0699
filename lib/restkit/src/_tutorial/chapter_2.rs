//! # Chapter 2: Outcomes
//!
//! Every operation returns an [`Outcome`](crate::Outcome): a
//! [`Success`](crate::Success) or a [`Failure`](crate::Failure). Nothing
//! panics and nothing is retried behind your back.
//!
//! ## Failure Kinds
//!
//! | Kind | When | Status | Body |
//! |------|------|--------|------|
//! | `Transport` | no response (refused, DNS, timeout) | - | - |
//! | `Redirection` | 3xx | yes | yes |
//! | `ClientError` | 4xx | yes | yes |
//! | `ServerError` | 5xx | yes | yes |
//! | `Unexpected` | 1xx or outside 100-599 | yes | yes |
//! | `DecodeError` | 2xx with a body that is not the expected JSON | yes | yes |
//! | `InvalidRequest` | rejected before sending | - | - |
//!
//! ## Matching on Kinds
//!
//! ```ignore
//! match client.get("todos", 999).await {
//!     Ok(success) => println!("{}", success.payload()),
//!     Err(failure) if failure.is_not_found() => println!("no such todo"),
//!     Err(failure) => match failure.kind() {
//!         FailureKind::Transport => eprintln!("network trouble: {failure}"),
//!         FailureKind::ServerError => eprintln!("server said: {:?}", failure.text()),
//!         _ => eprintln!("{failure}"),
//!     },
//! }
//! ```
//!
//! ## Error Bodies
//!
//! The raw body of an HTTP failure is kept so you can decode the server's
//! own error format:
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct Violation { field: String, message: String }
//!
//! if let Err(failure) = client.create("todos", &attrs).await {
//!     if let Some(Ok(violations)) = failure.decode_body::<Vec<Violation>>() {
//!         for v in violations {
//!             eprintln!("{}: {}", v.field, v.message);
//!         }
//!     }
//! }
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 3: Transport & Middleware][super::chapter_3] - Timeouts and retries
