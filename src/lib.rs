//! yourtasks - a terminal to-do list for a REST task backend
//!
//! The library renders a task list fetched from a remote service and lets
//! the user create, toggle, edit, delete and filter tasks.
//!
//! # Modules
//!
//! * [`task`] - Task, TaskId and Filter data model
//! * [`backend`] - Task service trait and its REST implementation
//! * [`controller`] - Client-side task list state and its reconciliation with the service
//! * [`config`] - Application configuration management
//! * [`logger`] - In-memory and file logging
//! * [`ui`] - Terminal user interface components

/// Task service abstraction and REST client
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task list controller
pub mod controller;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Task data model
pub mod task;

/// Terminal user interface components and rendering
pub mod ui;

pub use controller::{TaskListController, TaskListState};
pub use task::{Filter, Task, TaskId};
