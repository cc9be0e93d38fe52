//! Task list controller.
//!
//! The controller owns the client-side [`TaskListState`] and reconciles it
//! with a remote [`TaskService`]. Every network operation is split in three
//! steps so the UI can run requests in the background without sharing state:
//!
//! 1. an intent method (`create`, `toggle_complete`, `save_edit`, ...) checks
//!    the state and returns the [`Request`] to perform, if any;
//! 2. [`execute`] performs the single HTTP round-trip and yields an
//!    [`Outcome`], never touching state;
//! 3. [`TaskListController::apply`] folds the outcome back into the state.
//!
//! Requests carry no sequence numbers: overlapping loads are applied in
//! completion order and the last one to finish wins.

use log::{debug, warn};
use std::sync::Arc;

use crate::backend::{CreateTaskArgs, TaskService, UpdateTaskArgs};
use crate::constants::{
    ERROR_CREATE_FAILED, ERROR_DELETE_FAILED, ERROR_EMPTY_TITLE, ERROR_FETCH_FAILED, ERROR_SAVE_FAILED,
    ERROR_TOGGLE_FAILED,
};
use crate::task::{Filter, Task, TaskId};

/// Title validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{msg}", msg = ERROR_EMPTY_TITLE)]
    EmptyTitle,
}

/// Trim `text` and reject it if nothing is left.
pub fn validate_title(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyTitle)
    } else {
        Ok(trimmed.to_string())
    }
}

/// The single task currently open for inline editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub text: String,
}

/// Interaction mode derived from the edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing(TaskId),
}

/// Explicit client state for the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub draft: String,
    pub filter: Filter,
    pub dark_mode: bool,
    pub edit: Option<EditSession>,
    /// Blocking message waiting to be acknowledged by the user
    pub notification: Option<String>,
}

impl TaskListState {
    pub fn with_preferences(filter: Filter, dark_mode: bool) -> Self {
        Self {
            filter,
            dark_mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> Mode {
        match &self.edit {
            Some(session) => Mode::Editing(session.task_id.clone()),
            None => Mode::Viewing,
        }
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.edit.as_ref().is_some_and(|session| &session.task_id == id)
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn replace_task(&mut self, updated: Task) {
        for task in &mut self.tasks {
            if task.id == updated.id {
                *task = updated.clone();
            }
        }
    }
}

/// One HTTP round-trip against the task service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Load(Filter),
    Create(CreateTaskArgs),
    Toggle { id: TaskId, args: UpdateTaskArgs },
    SaveEdit { id: TaskId, args: UpdateTaskArgs },
    Delete(TaskId),
}

impl Request {
    /// Message shown to the user when this request fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Request::Load(_) => ERROR_FETCH_FAILED,
            Request::Create(_) => ERROR_CREATE_FAILED,
            Request::Toggle { .. } => ERROR_TOGGLE_FAILED,
            Request::SaveEdit { .. } => ERROR_SAVE_FAILED,
            Request::Delete(_) => ERROR_DELETE_FAILED,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Request::Load(filter) => format!("Load {} tasks", filter),
            Request::Create(args) => format!("Create task '{}'", args.title),
            Request::Toggle { id, args } => format!("Toggle task {} to completed={}", id, args.completed),
            Request::SaveEdit { id, args } => format!("Save task {} as '{}'", id, args.title),
            Request::Delete(id) => format!("Delete task {}", id),
        }
    }
}

/// Result of a finished [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded { filter: Filter, tasks: Vec<Task> },
    Created(Task),
    Toggled(Task),
    Saved(Task),
    Deleted(TaskId),
    Failed { message: &'static str, detail: String },
}

/// Perform `request` against `service`.
pub async fn execute(service: &dyn TaskService, request: Request) -> Outcome {
    let message = request.failure_message();
    let description = request.describe();

    let result = match request {
        Request::Load(filter) => service
            .list_tasks(filter)
            .await
            .map(|tasks| Outcome::Loaded { filter, tasks }),
        Request::Create(args) => service.create_task(args).await.map(Outcome::Created),
        Request::Toggle { id, args } => service.update_task(&id, args).await.map(Outcome::Toggled),
        Request::SaveEdit { id, args } => service.update_task(&id, args).await.map(Outcome::Saved),
        Request::Delete(id) => service.delete_task(&id).await.map(|()| Outcome::Deleted(id)),
    };

    result.unwrap_or_else(|e| Outcome::Failed {
        message,
        detail: format!("{}: {}", description, e),
    })
}

/// Owns the task list state and the service it is synchronized with.
pub struct TaskListController {
    state: TaskListState,
    service: Arc<dyn TaskService>,
}

impl TaskListController {
    pub fn new(service: Arc<dyn TaskService>, state: TaskListState) -> Self {
        Self { state, service }
    }

    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TaskListState {
        &mut self.state
    }

    pub fn service(&self) -> Arc<dyn TaskService> {
        Arc::clone(&self.service)
    }

    /// Load the tasks for `filter`.
    pub fn load(&self, filter: Filter) -> Request {
        Request::Load(filter)
    }

    /// Reload the currently selected filter.
    pub fn reload(&self) -> Request {
        self.load(self.state.filter)
    }

    /// Create a task titled `title`; blank titles are ignored without notice.
    pub fn create(&self, title: &str) -> Option<Request> {
        let title = validate_title(title).ok()?;
        Some(Request::Create(CreateTaskArgs { title }))
    }

    /// Create a task from the draft input.
    pub fn submit_draft(&self) -> Option<Request> {
        self.create(&self.state.draft)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.state.draft.push(c);
    }

    pub fn pop_draft_char(&mut self) {
        self.state.draft.pop();
    }

    /// Flip the completion flag of `task`, resending its current title.
    pub fn toggle_complete(&self, task: &Task) -> Request {
        Request::Toggle {
            id: task.id.clone(),
            args: UpdateTaskArgs {
                title: task.title.clone(),
                completed: !task.completed,
            },
        }
    }

    /// Open `task` for editing, abandoning any other edit in progress.
    pub fn start_edit(&mut self, task: &Task) {
        if let Some(previous) = &self.state.edit {
            if previous.task_id != task.id {
                debug!("Abandoning unsaved edit of task {}", previous.task_id);
            }
        }
        self.state.edit = Some(EditSession {
            task_id: task.id.clone(),
            text: task.title.clone(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.state.edit = None;
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(session) = &mut self.state.edit {
            session.text = text.into();
        }
    }

    pub fn push_edit_char(&mut self, c: char) {
        if let Some(session) = &mut self.state.edit {
            session.text.push(c);
        }
    }

    pub fn pop_edit_char(&mut self) {
        if let Some(session) = &mut self.state.edit {
            session.text.pop();
        }
    }

    /// Save the working text as the new title of `task`.
    ///
    /// Returns `None` when no edit is open or when the text is blank; the
    /// latter raises a notification and keeps the edit open.
    pub fn save_edit(&mut self, task: &Task) -> Option<Request> {
        let text = self.state.edit.as_ref()?.text.clone();
        match validate_title(&text) {
            Ok(title) => Some(Request::SaveEdit {
                id: task.id.clone(),
                args: UpdateTaskArgs {
                    title,
                    completed: task.completed,
                },
            }),
            Err(e) => {
                self.state.notification = Some(e.to_string());
                None
            }
        }
    }

    /// Save the current edit target.
    ///
    /// If the target has left the collection (e.g. after a reload under a
    /// different filter) the edit is dropped.
    pub fn save_current_edit(&mut self) -> Option<Request> {
        let task_id = self.state.edit.as_ref()?.task_id.clone();
        match self.state.find(&task_id).cloned() {
            Some(task) => self.save_edit(&task),
            None => {
                debug!("Edit target {} no longer listed, dropping edit", task_id);
                self.cancel_edit();
                None
            }
        }
    }

    pub fn delete(&self, id: &TaskId) -> Request {
        Request::Delete(id.clone())
    }

    /// Switch to `filter`, returning the load it triggers.
    ///
    /// Re-selecting the active filter is a no-op.
    pub fn set_filter(&mut self, filter: Filter) -> Option<Request> {
        if self.state.filter == filter {
            return None;
        }
        self.state.filter = filter;
        Some(self.load(filter))
    }

    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
    }

    /// Reconcile a finished request into the state.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded { filter, tasks } => {
                if filter != self.state.filter {
                    debug!(
                        "Applying {} tasks loaded for '{}' while '{}' is selected",
                        tasks.len(),
                        filter,
                        self.state.filter
                    );
                }
                self.state.tasks = tasks;
            }
            Outcome::Created(task) => {
                self.state.tasks.push(task);
                self.state.draft.clear();
            }
            Outcome::Toggled(task) => {
                self.state.replace_task(task);
            }
            Outcome::Saved(task) => {
                self.state.replace_task(task);
                self.cancel_edit();
            }
            Outcome::Deleted(id) => {
                self.state.tasks.retain(|task| task.id != id);
            }
            Outcome::Failed { message, detail } => {
                warn!("{}", detail);
                self.state.notification = Some(message.to_string());
            }
        }
    }

    /// Execute `request` and apply its outcome before returning.
    pub async fn dispatch(&mut self, request: Request) {
        let outcome = execute(self.service.as_ref(), request).await;
        self.apply(outcome);
    }
}
