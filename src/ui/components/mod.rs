//! Reusable UI components

// Component architecture
pub mod context_menu;
pub mod dialog_component;
pub mod dialogs;
pub mod intake_dialog_component;
pub mod status_bar;
pub mod task_panel_component;

// Component exports
pub use context_menu::{ContextMenu, PanelCommand};
pub use dialog_component::DialogComponent;
pub use intake_dialog_component::{classify_drop, Dropped, IntakeDialogComponent, IntakeMode};
pub use status_bar::{StatusBar, StatusInfo};
pub use task_panel_component::TaskPanelComponent;
