//! Constants used throughout the application
//!
//! This module centralizes user-facing strings and default values.

/// Task backend used when neither the config file nor the environment names one
pub const DEFAULT_API_URL: &str = "https://todo-backend-zey7.onrender.com";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "YOURTASKS_API_URL";

// Notification Messages
pub const ERROR_FETCH_FAILED: &str = "Fetch error";
pub const ERROR_CREATE_FAILED: &str = "Add failed";
pub const ERROR_TOGGLE_FAILED: &str = "Toggle failed";
pub const ERROR_SAVE_FAILED: &str = "Save failed";
pub const ERROR_DELETE_FAILED: &str = "Delete failed";
pub const ERROR_EMPTY_TITLE: &str = "Cannot be empty";

// UI Text
pub const HEADER_TITLE: &str = "your tasks";
pub const DARK_MODE_LABEL: &str = "🌙 Dark";
pub const LIGHT_MODE_LABEL: &str = "☀️ Light";
pub const DRAFT_PLACEHOLDER: &str = "press enter to add...";
pub const EMPTY_LIST_MESSAGE: &str = "no tasks found";
pub const HINT_TEXT: &str = "e or enter on task to edit • a to type • enter to add • ? help";
pub const DIALOG_TITLE_ERROR: &str = "Error";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";
pub const DIALOG_DISMISS_HINT: &str = "Press Enter or Esc to dismiss";
pub const LOADING_MESSAGE: &str = "Loading tasks...";

// Log Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "yourtasks.log";
