use crate::core::{BitorrentSubTask, LinkAction, SingleTask, TaskLink};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Intake requests
    ResolveSingle(String),
    SubmitSingle(SingleTask),
    PreParseBatch(String),
    /// Read the clipboard, then pre-parse its text as a batch
    PreParseBatchFromClipboard,
    SubmitBatch(Vec<String>),
    UploadBitorrent(PathBuf),
    CommitBitorrent(Vec<BitorrentSubTask>),
    ResolveMagnet(String),

    // Task list requests
    RequestRemove {
        ids: Vec<String>,
        rows: Vec<usize>,
    },
    OpenLink {
        task: TaskLink,
        action: LinkAction,
        forced: bool,
    },
    /// Enter or double click on a task: the core's classifier decides what opens
    QuickView(TaskLink),
    CopyToClipboard(String),
    Refresh,

    // UI operations
    ShowIntake,
    HideIntake,
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,
    ToggleQuickView,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Error(String),
    Info(String),
    Help,
    Logs,
}
