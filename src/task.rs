//! Task data model shared by the backend, the controller and the UI.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned task identifier.
///
/// The client treats it as opaque: it is never generated or modified locally,
/// only compared and echoed back into request paths. Backends are free to
/// send it as a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Ok(TaskId(text)),
            RawId::Unsigned(number) => Ok(TaskId(number.to_string())),
            RawId::Signed(number) => Ok(TaskId(number.to_string())),
        }
    }
}

/// A task as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Client-side view selector over the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    /// Completion predicate sent to the server; `None` means unfiltered.
    pub fn completed(self) -> Option<bool> {
        match self {
            Filter::All => None,
            Filter::Completed => Some(true),
            Filter::Pending => Some(false),
        }
    }

    /// Whether a task belongs to this view.
    pub fn matches(self, task: &Task) -> bool {
        self.completed().map_or(true, |completed| task.completed == completed)
    }

    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Completed,
            Filter::Completed => Filter::Pending,
            Filter::Pending => Filter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "pending" => Ok(Filter::Pending),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}
