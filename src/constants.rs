//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Input recognition
/// Prefix that turns a single-task URL into a magnet lookup
pub const MAGNET_PREFIX: &str = "magnet:";

// Column headers
pub const HEADER_SIZE: &str = "Size";
pub const HEADER_NAME: &str = "Name";

// Intake dialog labels
pub const TAB_SINGLE: &str = "Single";
pub const TAB_BITORRENT: &str = "BitTorrent";
pub const TAB_BATCH: &str = "Batch";

pub fn label_file_size(size: &str) -> String {
    format!("File size: {}", size)
}

pub fn label_disk_size(size: &str) -> String {
    format!("Task would consume {} disk size.", size)
}

pub fn label_bt_total(title: &str, total: &str) -> String {
    format!("{} (Total: {})", title, total)
}

pub fn label_batch_total(total: &str) -> String {
    format!("Total size of tasks: {}", total)
}

pub const PROMPT_TORRENT_PATH: &str = "Upload a torrent file (*.torrent)";

// Context menu entries
pub const MENU_PREVIEW: &str = "Preview";
pub const MENU_DOWNLOAD: &str = "Download";
pub const MENU_REMOVE: &str = "Remove selected tasks";
pub const MENU_COPY_DOWNLOAD: &str = "Copy download address";
pub const MENU_COPY_SOURCE: &str = "Copy source address";
pub const MENU_COPY_NAME: &str = "Copy task name";
pub const MENU_COPY_SCRIPT: &str = "Copy as Script";
pub const MENU_COLLAPSE_ALL: &str = "Collapse all";
pub const MENU_EXPAND_ALL: &str = "Expand all";
pub const MENU_RESIZE_COLUMNS: &str = "Resize Columns";

// Status messages
pub const STATUS_COPIED: &str = "📋 Copied to clipboard";
pub const STATUS_REMOVE_REQUESTED: &str = "🗑 Removal requested";
pub const STATUS_REFRESHING: &str = "🔄 Refreshing task list...";
pub const ERROR_CLIPBOARD: &str = "❌ Clipboard unavailable";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const EMPTY_TASK_LIST: &str = "No remote tasks. Press 'a' to add one or 'r' to refresh.";

// Row highlight for tasks whose download link is still being resolved
pub const UNRESOLVED_ROW_COLOR: &str = "#9CC6EE";

/// Default downloader script. Placeholders: `{gdriveid}`, `{name}`, `{link}`.
pub const DEFAULT_SCRIPT_TEMPLATE: &str =
    "aria2c -c -s10 -x10 --header 'Cookie: gdriveid={gdriveid}' --out '{name}' '{link}'";

// UI Layout Constants
/// Minimum size column width in columns
pub const SIZE_COLUMN_MIN_WIDTH: u16 = 6;
/// Maximum size column width in columns
pub const SIZE_COLUMN_MAX_WIDTH: u16 = 30;
/// Default size column width in columns
pub const SIZE_COLUMN_DEFAULT_WIDTH: u16 = 12;
/// Two clicks on the same row within this many milliseconds count as a double click
pub const DOUBLE_CLICK_MILLIS: u128 = 400;

// Logging
/// Entries kept in the in-memory log buffer; older ones are dropped first
pub const MAX_LOG_ENTRIES: usize = 1000;
