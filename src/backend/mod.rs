//! Task service abstraction.
//!
//! This module defines the interface the controller uses to reach the remote
//! task store, along with the request argument types and error handling.

use async_trait::async_trait;
use serde::Serialize;

use crate::task::{Filter, Task, TaskId};

pub mod rest;

pub use rest::RestBackend;

/// Common error types for task service operations.
///
/// Callers surface every variant the same way; the distinction only feeds
/// diagnostic logging.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Body of a create request. The server assigns the id and completion flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTaskArgs {
    pub title: String,
}

/// Body of an update request.
///
/// Updates are full replacements, so both fields are always sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateTaskArgs {
    pub title: String,
    pub completed: bool,
}

/// Interface to the remote task store.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Returns the backend type identifier (e.g., "rest").
    fn backend_type(&self) -> &str;

    /// Fetch the tasks visible under `filter`, in server order.
    async fn list_tasks(&self, filter: Filter) -> Result<Vec<Task>, BackendError>;

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError>;
    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<Task, BackendError>;
    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError>;
}
