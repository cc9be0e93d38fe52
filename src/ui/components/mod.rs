//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod draft_input;
pub mod filter_bar;
pub mod header;
pub mod status_bar;
pub mod task_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use draft_input::DraftInputComponent;
pub use filter_bar::FilterBarComponent;
pub use header::Header;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
