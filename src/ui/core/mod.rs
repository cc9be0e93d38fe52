//! Core UI functionality.
//!
//! This module contains the building blocks shared by every screen component:
//!
//! - [`actions`] - Action definitions produced by key handling and background work
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background execution of task service requests
//!
//! Components turn key presses into [`Action`]s, the app component applies
//! them through the task list controller, and network requests run in the
//! [`TaskManager`] until their outcome comes back as another action.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{FinishedRequest, RequestId, TaskManager};
