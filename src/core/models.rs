//! Task data reported by the task core.
//!
//! These types are produced by the core and only read by the UI. The UI never
//! mutates them; it projects them into its own row types in [`crate::ui::model`].

use serde::{Deserialize, Serialize};

/// Kind of a remote task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// A plain downloadable file
    #[default]
    File,
    /// A BitTorrent container with selectable sub-files
    Bitorrent,
}

/// A task known to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoteTask {
    pub id: String,
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Original source URL (http link, magnet, ed2k, ...)
    pub source: String,
    /// Download URL; empty while the service is still resolving the task
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub kind: TaskKind,
}

impl RemoteTask {
    pub fn is_bitorrent(&self) -> bool {
        self.kind == TaskKind::Bitorrent
    }

    pub fn is_resolved(&self) -> bool {
        !self.link.is_empty()
    }
}

/// One file inside a BitTorrent container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BitorrentSubTask {
    pub id: String,
    pub file_index: String,
    /// Size as reported by the core (already formatted or raw bytes)
    pub size: String,
    pub name: String,
    /// Download link, absent until the sub-file has been fetched
    #[serde(default)]
    pub link: Option<String>,
}

/// A resolved BitTorrent container, as reported after an upload or magnet lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BitorrentTask {
    pub task_id: String,
    pub title: String,
    /// Total size in bytes
    pub total_size: u64,
    pub subtasks: Vec<BitorrentSubTask>,
}

/// One candidate extracted from a batch of pasted links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchTaskEntry {
    /// Estimated size in bytes
    pub size: u64,
    pub name: String,
    pub url: String,
}

/// Resolved description of a single URL before submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SingleTask {
    pub url: String,
    pub name: String,
    pub size: String,
}

/// The `{ url, name }` pair handed to download/preview requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskLink {
    pub url: String,
    pub name: String,
}
