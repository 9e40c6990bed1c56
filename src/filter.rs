//! Filter and search visibility engine
//!
//! Visibility is a pure function of the current filter mode, the search
//! query, and the task's own status and rendered text. It never touches
//! ordering and recomputing it is idempotent.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// Which tasks the list should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
}

impl FilterMode {
    /// Cycle all -> pending -> completed -> all
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Decide whether a task is visible under the given filter mode and query.
///
/// The query is trimmed and matched case-insensitively as a substring of the
/// task's rendered text (description plus due label); an empty query matches
/// every task.
#[must_use]
pub fn compute_visibility(task: &Task, mode: FilterMode, query: &str) -> bool {
    if !mode.matches(task.status) {
        return false;
    }

    let needle = query.trim().to_lowercase();
    needle.is_empty() || task.rendered_text().to_lowercase().contains(&needle)
}
