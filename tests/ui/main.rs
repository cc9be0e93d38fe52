#[path = "../common/mod.rs"]
mod common;

mod app_component;
mod event_handler;
mod task_manager;
