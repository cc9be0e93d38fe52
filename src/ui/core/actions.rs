use crate::controller::Outcome;
use crate::task::{Filter, TaskId};

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // Draft input
    FocusDraft,
    BlurDraft,
    DraftInput(char),
    DraftBackspace,
    SubmitDraft,

    // Task operations
    ToggleTask(TaskId),
    DeleteTask(TaskId),
    StartEdit(TaskId),
    EditInput(char),
    EditBackspace,
    SaveEdit,
    CancelEdit,

    // View operations
    SetFilter(Filter),
    NextFilter,
    ToggleDarkMode,
    Reload,

    // Background request finished
    RequestFinished(Outcome),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DismissNotification,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
