//! cloudtasks - a terminal client for remote download tasks
//!
//! This library provides the terminal interface in front of a task core: a
//! filterable tree of remote tasks (BitTorrent containers expand into their
//! sub-files) and an add-task dialog for single URLs, torrents and batches of
//! links. Everything that talks to the remote service sits behind the
//! [`core::TaskCore`] trait.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`core`] - Task core boundary and the in-memory core
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Size formatting, script rendering and color helpers

/// Clipboard access for the copy commands and batch intake
pub mod clipboard;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task core requests, notifications and data types
pub mod core;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for formatting and other helpers
pub mod utils;
