//! Modal dialog components

pub mod common;
pub mod error_dialog;
pub mod task_creation_dialog;
pub mod task_edit_dialog;

pub use error_dialog::ErrorDialog;
pub use task_creation_dialog::TaskCreationDialog;
pub use task_edit_dialog::TaskEditDialog;
