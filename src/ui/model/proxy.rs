//! Filtered projection of [`TaskTreeModel`].
//!
//! The proxy never copies or mutates rows. It keeps, per visible top-level row,
//! the source index of that row and of each visible child, and maps addresses
//! between view and source coordinates.

use super::filter::TextFilter;
use super::tree_model::{RowRef, TaskTreeModel};
use crate::config::FilterMode;

#[derive(Debug, Clone, PartialEq, Eq)]
struct VisibleRow {
    source: usize,
    children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct FilterProxy {
    filter: TextFilter,
    visible: Vec<VisibleRow>,
}

impl FilterProxy {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            filter: TextFilter::new(mode),
            visible: Vec::new(),
        }
    }

    pub fn filter(&self) -> &TextFilter {
        &self.filter
    }

    /// Change the filter text and re-project `model`.
    pub fn set_filter_text(&mut self, text: &str, model: &TaskTreeModel) {
        self.filter.set_text(text);
        self.invalidate(model);
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode, model: &TaskTreeModel) {
        self.filter.set_mode(mode);
        self.invalidate(model);
    }

    /// Recompute the projection after the source model changed.
    pub fn invalidate(&mut self, model: &TaskTreeModel) {
        self.visible = model
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| self.filter.matches(&row.name))
            .map(|(source, row)| VisibleRow {
                source,
                children: row
                    .children
                    .iter()
                    .enumerate()
                    .filter(|(_, child)| self.filter.matches(&child.name))
                    .map(|(index, _)| index)
                    .collect(),
            })
            .collect();
    }

    /// Number of visible top-level rows.
    pub fn row_count(&self) -> usize {
        self.visible.len()
    }

    /// Number of visible children under view row `row`.
    pub fn child_count(&self, row: usize) -> usize {
        self.visible.get(row).map_or(0, |row| row.children.len())
    }

    pub fn map_to_source(&self, at: RowRef) -> Option<RowRef> {
        match at {
            RowRef::Top(row) => self.visible.get(row).map(|row| RowRef::Top(row.source)),
            RowRef::Child { parent, row } => {
                let parent = self.visible.get(parent)?;
                let child = parent.children.get(row)?;
                Some(RowRef::Child {
                    parent: parent.source,
                    row: *child,
                })
            }
        }
    }

    pub fn map_from_source(&self, at: RowRef) -> Option<RowRef> {
        let parent_source = at.top_row();
        let parent = self.visible.iter().position(|row| row.source == parent_source)?;
        match at {
            RowRef::Top(_) => Some(RowRef::Top(parent)),
            RowRef::Child { row, .. } => {
                let child = self.visible[parent].children.iter().position(|&child| child == row)?;
                Some(RowRef::Child { parent, row: child })
            }
        }
    }
}
