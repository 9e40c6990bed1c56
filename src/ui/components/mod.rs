//! UI components for taskline

pub mod dialogs;
pub mod help_panel;
pub mod search_bar;
pub mod status_bar;
pub mod tasks_list;

pub use help_panel::HelpPanel;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use tasks_list::TasksList;
