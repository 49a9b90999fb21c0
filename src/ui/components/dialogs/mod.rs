//! Dialog rendering helpers

pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;
