//! Source model of the task list panel.
//!
//! Top-level rows are remote tasks; BitTorrent containers may carry child rows
//! for their sub-files. The model is rebuilt wholesale on every task list push
//! and is never touched by filtering.

use crate::core::{BitorrentSubTask, RemoteTask, TaskKind};
use crate::icons::FileKind;
use crate::utils::format::readable_size;
use std::collections::HashMap;

/// Hidden data carried by a top-level task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowMeta {
    pub task_id: String,
    pub link: String,
    pub source: String,
    pub kind: TaskKind,
}

/// Hidden data carried by a sub-file row. Sub-files only know their download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubTaskRowMeta {
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubTaskRow {
    pub size_text: String,
    pub name: String,
    pub file_kind: FileKind,
    /// Drawn in the "still resolving" color
    pub highlight: bool,
    pub meta: SubTaskRowMeta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub size_text: String,
    pub name: String,
    pub file_kind: FileKind,
    pub highlight: bool,
    pub meta: TaskRowMeta,
    pub children: Vec<SubTaskRow>,
}

impl TaskRow {
    fn from_task(task: &RemoteTask) -> Self {
        Self {
            size_text: readable_size(task.size),
            name: task.name.clone(),
            file_kind: FileKind::from_name(&task.name, task.is_bitorrent()),
            // Containers resolve per sub-file, so only plain files are highlighted
            highlight: !task.is_bitorrent() && !task.is_resolved(),
            meta: TaskRowMeta {
                task_id: task.id.clone(),
                link: task.link.clone(),
                source: task.source.clone(),
                kind: task.kind,
            },
            children: Vec::new(),
        }
    }
}

impl SubTaskRow {
    fn from_subtask(subtask: &BitorrentSubTask) -> Self {
        let link = subtask.link.clone().filter(|link| !link.is_empty());
        Self {
            size_text: subtask.size.clone(),
            name: subtask.name.clone(),
            file_kind: FileKind::from_name(&subtask.name, false),
            highlight: link.is_none(),
            meta: SubTaskRowMeta { link },
        }
    }
}

/// Address of a row: either a top-level row or a child of one.
///
/// The same shape is used for source and view coordinates; which one is meant
/// depends on who hands it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowRef {
    Top(usize),
    Child { parent: usize, row: usize },
}

impl RowRef {
    pub fn top_row(self) -> usize {
        match self {
            RowRef::Top(row) => row,
            RowRef::Child { parent, .. } => parent,
        }
    }

    pub fn is_child(self) -> bool {
        matches!(self, RowRef::Child { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskTreeModel {
    rows: Vec<TaskRow>,
    /// Container task id -> top-level row
    parents: HashMap<String, usize>,
}

impl TaskTreeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with `tasks`.
    pub fn set_tasks(&mut self, tasks: &[RemoteTask]) {
        self.rows = tasks.iter().map(TaskRow::from_task).collect();
        self.rebuild_parents();
    }

    /// Append sub-file rows under the container registered as `container_id`.
    ///
    /// Returns false when no such container is known.
    pub fn append_sub_tasks(&mut self, container_id: &str, subtasks: &[BitorrentSubTask]) -> bool {
        let Some(&row) = self.parents.get(container_id) else {
            log::debug!("TaskTreeModel: Mismatch, no container row for task '{}'", container_id);
            return false;
        };

        let Some(parent) = self.rows.get_mut(row) else {
            log::debug!("TaskTreeModel: Mismatch, parent row {} out of range", row);
            return false;
        };

        parent.children.extend(subtasks.iter().map(SubTaskRow::from_subtask));
        true
    }

    /// Remove top-level rows by source index. Returns how many rows were removed.
    pub fn remove_rows(&mut self, rows: &[usize]) -> usize {
        let mut rows: Vec<usize> = rows.iter().copied().filter(|&row| row < self.rows.len()).collect();
        rows.sort_unstable();
        rows.dedup();

        // Highest first so earlier indices stay valid
        for &row in rows.iter().rev() {
            self.rows.remove(row);
        }

        if !rows.is_empty() {
            self.rebuild_parents();
        }
        rows.len()
    }

    fn rebuild_parents(&mut self) {
        self.parents = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.meta.kind == TaskKind::Bitorrent)
            .map(|(index, row)| (row.meta.task_id.clone(), index))
            .collect();
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&TaskRow> {
        self.rows.get(row)
    }

    pub fn child(&self, parent: usize, row: usize) -> Option<&SubTaskRow> {
        self.rows.get(parent).and_then(|parent| parent.children.get(row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn parent_row(&self, container_id: &str) -> Option<usize> {
        self.parents.get(container_id).copied()
    }

    /// Name of the row at `at` (source coordinates).
    pub fn name_at(&self, at: RowRef) -> Option<&str> {
        match at {
            RowRef::Top(row) => self.row(row).map(|row| row.name.as_str()),
            RowRef::Child { parent, row } => self.child(parent, row).map(|row| row.name.as_str()),
        }
    }

    /// Download link of the row at `at` (source coordinates); empty when unresolved.
    pub fn link_at(&self, at: RowRef) -> Option<&str> {
        match at {
            RowRef::Top(row) => self.row(row).map(|row| row.meta.link.as_str()),
            RowRef::Child { parent, row } => self
                .child(parent, row)
                .map(|row| row.meta.link.as_deref().unwrap_or_default()),
        }
    }

    /// Source URL of the row at `at`. Sub-files carry no source of their own.
    pub fn source_at(&self, at: RowRef) -> Option<&str> {
        match at {
            RowRef::Top(row) => self.row(row).map(|row| row.meta.source.as_str()),
            RowRef::Child { .. } => None,
        }
    }

    /// Task id of a top-level row. Sub-files carry no id.
    pub fn task_id_at(&self, at: RowRef) -> Option<&str> {
        match at {
            RowRef::Top(row) => self.row(row).map(|row| row.meta.task_id.as_str()),
            RowRef::Child { .. } => None,
        }
    }
}
