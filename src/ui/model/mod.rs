//! Display models behind the task list panel and the intake dialog.
//!
//! - [`tree_model`] - source rows of the task list, with BitTorrent sub-files as children
//! - [`proxy`] - filtered projection of the tree and view/source index mapping
//! - [`filter`] - regex, wildcard and fixed-string matching
//! - [`table_model`] - selectable flat tables for torrent sub-files and batch links

pub mod filter;
pub mod proxy;
pub mod table_model;
pub mod tree_model;

pub use filter::TextFilter;
pub use proxy::FilterProxy;
pub use table_model::{BatchPickRow, BitorrentPickRow, PickRow, PickTable};
pub use tree_model::{RowRef, SubTaskRow, SubTaskRowMeta, TaskRow, TaskRowMeta, TaskTreeModel};
