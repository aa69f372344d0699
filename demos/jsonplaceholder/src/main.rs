//! JSONPlaceholder Example
//!
//! Walks through the six resource operations against
//! <https://jsonplaceholder.typicode.com>, a public fake REST API.

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use std::error::Error;
use std::time::Duration;

use restkit::prelude::*;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

// ============================================================================
// Data Types
// ============================================================================

/// A todo item, without its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

/// A todo item as stored on the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredTodo {
    pub id: u64,
    #[serde(flatten)]
    pub todo: Todo,
}

// ============================================================================
// Operations
// ============================================================================

/// Fetch every todo and parse them into typed values.
pub async fn all_todos<T: Transport>(
    client: &ResourceClient<T>,
) -> Result<Vec<StoredTodo>, Box<dyn Error>> {
    let todos = client.list("todos").await?.into_payload();
    let typed = todos
        .iter()
        .map(Resource::parse::<StoredTodo>)
        .collect::<Result<_, _>>()?;
    Ok(typed)
}

/// Fetch one todo.
pub async fn todo<T: Transport>(
    client: &ResourceClient<T>,
    id: u64,
) -> Result<StoredTodo, Box<dyn Error>> {
    let resource = client.get("todos", id).await?.into_payload();
    Ok(resource.parse()?)
}

/// Create a todo and return the id the server assigned.
pub async fn add_todo<T: Transport>(
    client: &ResourceClient<T>,
    todo: &Todo,
) -> Result<ResourceId, Box<dyn Error>> {
    let attributes = to_attributes(todo)?;
    let created = client.create("todos", &attributes).await?.into_payload();
    client
        .config()
        .identity(&created)
        .ok_or_else(|| "created todo has no id".into())
}

/// Replace a todo with a full new representation.
pub async fn rewrite_todo<T: Transport>(
    client: &ResourceClient<T>,
    id: u64,
    todo: &Todo,
) -> Result<StoredTodo, Box<dyn Error>> {
    let attributes = to_attributes(todo)?;
    let replaced = client.replace("todos", id, &attributes).await?.into_payload();
    Ok(replaced.parse()?)
}

/// Mark a todo as done, leaving its other fields alone.
pub async fn complete_todo<T: Transport>(
    client: &ResourceClient<T>,
    id: u64,
) -> Result<StoredTodo, Box<dyn Error>> {
    let attributes = to_attributes(&serde_json::json!({"completed": true}))?;
    let updated = client.update("todos", id, &attributes).await?.into_payload();
    Ok(updated.parse()?)
}

/// Delete a todo.
pub async fn remove_todo<T: Transport>(
    client: &ResourceClient<T>,
    id: u64,
) -> Result<u16, Box<dyn Error>> {
    Ok(client.delete("todos", id).await?.status())
}

// ============================================================================
// Main: Demonstrate usage
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let transport = HyperTransport::builder()
        .timeout(Duration::from_secs(10))
        .with_logging()
        .with_retry(2) // GET, PUT and DELETE only
        .build();
    let config = ClientConfig::builder(BASE_URL)
        .default_header("User-Agent", "restkit-jsonplaceholder-demo/0.1.0")
        .build()?;
    let client = ResourceClient::new(transport, config);

    println!("Resource client for {BASE_URL}");

    let todos = all_todos(&client).await?;
    println!("\nlist: {} todos", todos.len());

    let first = todo(&client, 1).await?;
    println!("get: #{} {:?} (completed: {})", first.id, first.todo.title, first.todo.completed);

    let new_todo = Todo {
        user_id: 1,
        title: "Buy milk".to_string(),
        completed: false,
    };
    let id = add_todo(&client, &new_todo).await?;
    println!("create: server assigned id {id}");

    let rewritten = Todo {
        user_id: 1,
        title: "Wash car".to_string(),
        completed: true,
    };
    let replaced = rewrite_todo(&client, 10, &rewritten).await?;
    println!("replace: #{} is now {:?}", replaced.id, replaced.todo.title);

    let updated = complete_todo(&client, 10).await?;
    println!("update: #{} completed = {}", updated.id, updated.todo.completed);

    let status = remove_todo(&client, 10).await?;
    println!("delete: HTTP {status}");

    // Failures carry their kind, status and body
    match client.get("todos", 999_999).await {
        Ok(success) => println!("\nunexpectedly found: {}", success.payload()),
        Err(failure) => println!(
            "\nmissing todo: {} (kind: {}, status: {:?})",
            failure.message(),
            failure.kind(),
            failure.status()
        ),
    }

    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================
