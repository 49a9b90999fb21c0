//! Boundary between the UI and the task core.
//!
//! The core owns authentication, network communication and the lifecycle of
//! remote tasks. The UI talks to it through [`TaskCore`] requests and hears back
//! through [`CoreEvent`] notifications delivered on a channel. Requests are
//! fire-and-forget: once forwarded, the UI has no further control over them
//! until the matching notification arrives (or never does).

pub mod memory;
pub mod models;

use std::path::Path;
use tokio::sync::mpsc;

pub use memory::MemoryCore;
pub use models::{BatchTaskEntry, BitorrentSubTask, BitorrentTask, RemoteTask, SingleTask, TaskKind, TaskLink};

/// What the UI asks the core to do with a task link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Download,
    Preview,
    Image,
}

/// Result of the core's content classifier for quick-view double clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Never,
    Video,
    Document,
    Image,
}

impl QuickAction {
    /// Link request a quick view turns into, with its `forced` flag.
    pub fn link_action(self) -> Option<(LinkAction, bool)> {
        match self {
            QuickAction::Never => None,
            QuickAction::Video => Some((LinkAction::Preview, false)),
            QuickAction::Document => Some((LinkAction::Download, true)),
            QuickAction::Image => Some((LinkAction::Image, true)),
        }
    }
}

/// Notifications pushed from the core into the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    SingleTaskReady(SingleTask),
    BitorrentTaskReady(BitorrentTask),
    BatchTaskReady(Vec<BatchTaskEntry>),
    TaskListReady(Vec<RemoteTask>),
    BtSubTasksReady {
        container_id: String,
        subtasks: Vec<BitorrentSubTask>,
    },
    /// Rows (source model indices) the core confirmed as removed
    TasksRemoved(Vec<usize>),
    /// Session cookie needed by downloader scripts
    CookiesReady(String),
}

pub type CoreEventSender = mpsc::UnboundedSender<CoreEvent>;
pub type CoreEventReceiver = mpsc::UnboundedReceiver<CoreEvent>;

/// Requests the UI forwards to the task core.
pub trait TaskCore {
    /// Resolve a single URL; answered by [`CoreEvent::SingleTaskReady`].
    fn resolve_single(&mut self, url: &str);

    /// Submit a previously resolved single task.
    fn submit_single(&mut self, task: &SingleTask);

    /// Parse raw text into batch candidates; answered by [`CoreEvent::BatchTaskReady`].
    fn pre_parse_batch(&mut self, text: &str);

    fn submit_batch(&mut self, urls: &[String]);

    /// Upload a local torrent file; answered by [`CoreEvent::BitorrentTaskReady`].
    fn upload_bitorrent(&mut self, path: &Path);

    fn commit_bitorrent(&mut self, subtasks: &[BitorrentSubTask]);

    /// Resolve a magnet link; answered by [`CoreEvent::BitorrentTaskReady`].
    fn resolve_magnet(&mut self, magnet: &str);

    /// Ask for removal; answered by [`CoreEvent::TasksRemoved`] with the same rows.
    fn request_remove(&mut self, ids: &[String], rows: &[usize]);

    fn open_link(&mut self, task: &TaskLink, action: LinkAction, forced: bool);

    /// Ask for a fresh task list; answered by [`CoreEvent::TaskListReady`].
    fn refresh(&mut self);

    /// Decide what a quick-view double click does for a task name.
    fn classify(&self, name: &str) -> QuickAction;
}

/// Create the channel the core uses to push notifications.
pub fn event_channel() -> (CoreEventSender, CoreEventReceiver) {
    mpsc::unbounded_channel()
}
