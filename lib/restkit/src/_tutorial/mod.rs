//! # Tutorial: Talking to REST Resources with restkit
//!
//! Learn to drive a JSON REST API step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first resource client
//! 2. [Operations & Payloads][chapter_1] - The six operations, typed payloads
//! 3. [Outcomes][chapter_2] - Success, failure kinds and error bodies
//! 4. [Transport & Middleware][chapter_3] - Timeouts, retry, logging
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
pub mod chapter_3;
