//! Flat, multi-selectable tables shown by the intake dialog.

use crate::core::{BatchTaskEntry, BitorrentSubTask};
use crate::utils::format::readable_size;
use std::collections::BTreeSet;

/// Columns every pickable row shows.
pub trait PickRow {
    fn size_text(&self) -> &str;
    fn name(&self) -> &str;
}

/// A sub-file of a resolved torrent, as offered for commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitorrentPickRow {
    pub size_text: String,
    pub name: String,
    pub sub_id: String,
    pub size: String,
    pub file_index: String,
}

impl From<&BitorrentSubTask> for BitorrentPickRow {
    fn from(subtask: &BitorrentSubTask) -> Self {
        Self {
            size_text: subtask.size.clone(),
            name: subtask.name.clone(),
            sub_id: subtask.id.clone(),
            size: subtask.size.clone(),
            file_index: subtask.file_index.clone(),
        }
    }
}

impl PickRow for BitorrentPickRow {
    fn size_text(&self) -> &str {
        &self.size_text
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A link candidate parsed from batch text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPickRow {
    pub size_text: String,
    pub name: String,
    pub url: String,
}

impl From<&BatchTaskEntry> for BatchPickRow {
    fn from(entry: &BatchTaskEntry) -> Self {
        Self {
            size_text: readable_size(entry.size),
            name: entry.name.clone(),
            url: entry.url.clone(),
        }
    }
}

impl PickRow for BatchPickRow {
    fn size_text(&self) -> &str {
        &self.size_text
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct PickTable<R> {
    rows: Vec<R>,
    selected: BTreeSet<usize>,
    cursor: usize,
}

impl<R> Default for PickTable<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selected: BTreeSet::new(),
            cursor: 0,
        }
    }
}

impl<R: PickRow> PickTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows; every new row starts selected.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.cursor = 0;
        self.select_all();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected.clear();
        self.cursor = 0;
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected rows with their positions, in table order.
    pub fn selected_rows(&self) -> impl Iterator<Item = (usize, &R)> {
        self.selected
            .iter()
            .filter_map(|&index| self.rows.get(index).map(|row| (index, row)))
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.rows.len()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn toggle(&mut self, row: usize) {
        if row >= self.rows.len() {
            return;
        }
        if !self.selected.remove(&row) {
            self.selected.insert(row);
        }
    }

    pub fn toggle_current(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn next(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + 1) % self.rows.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = if self.cursor == 0 {
                self.rows.len() - 1
            } else {
                self.cursor - 1
            };
        }
    }
}
