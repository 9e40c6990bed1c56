//! Taskline - a terminal task list
//!
//! This library provides a terminal-based task list: tasks carry a
//! description and a due date/time, the list stays ordered earliest-due
//! first, and tasks can be completed, edited, deleted, filtered by status and
//! searched by text. A light/dark theme preference persists across sessions.
//!
//! # Modules
//!
//! The library is organized into a pure core and a thin UI layer:
//!
//! * [`task`] - Task entity and construction
//! * [`store`] - Owning, due-time-ordered task collection
//! * [`validate`] - Input validation for new tasks
//! * [`filter`] - Filter/search visibility engine
//! * [`theme`] - Light/dark theme state and persistence
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Filter mode and search visibility computation
pub mod filter;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Owning task collection, kept in due-time order
pub mod store;

/// Task entity and the task factory
pub mod task;

/// Light/dark theme state machine and persistence
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Validation of raw user input before a task is admitted
pub mod validate;

// Re-export the core types for convenient access
pub use filter::FilterMode;
pub use store::TaskStore;
pub use task::{Task, TaskStatus};
pub use theme::Theme;
