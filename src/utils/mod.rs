//! Utility modules for the cloudtasks application.
//!
//! Small, pure helpers shared by the UI components:
//!
//! - [`color`] - Terminal color parsing for row highlights
//! - [`format`] - Size formatting and downloader script rendering

pub mod color;
pub mod format;
