//! Core UI functionality.
//!
//! This module contains the building blocks every component builds upon.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling (keys, mouse, bracketed paste)
//!
//! Components translate terminal events into [`Action`]s; the app component
//! forwards the actions that concern the task core and feeds core
//! notifications back into the components.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
