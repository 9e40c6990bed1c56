//! Task entity and construction
//!
//! A task is a pure data record, independent of any rendered widget. The
//! factory ([`Task::new`]) is only ever called with input the validator has
//! already accepted, so it has no failure path of its own.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Date format produced by the due-date input field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format produced by the due-time input field
pub const TIME_FORMAT: &str = "%H:%M";

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// Flip pending <-> completed; the only legal transition in either direction
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

/// A unit of work with a description, a due date/time, and a completion status
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub due_date: String,
    pub due_time: String,
    /// Epoch milliseconds derived from `due_date` + `due_time`; 0 when the
    /// combination does not parse, so malformed tasks sort to the front.
    /// Immutable after creation — there is no reschedule operation.
    pub due_at: i64,
    pub status: TaskStatus,
    /// View projection, recomputed by the filter/search engine; never persisted
    pub visible: bool,
}

impl Task {
    /// Build a task from validated input.
    ///
    /// The description is trimmed. An unparsable date/time pair is accepted
    /// deliberately: it degrades to `due_at = 0` rather than rejecting the
    /// task, matching the presence-only validation rules.
    #[must_use]
    pub fn new(description: &str, due_date: &str, due_time: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.trim().to_string(),
            due_date: due_date.to_string(),
            due_time: due_time.to_string(),
            due_at: parse_due_at(due_date, due_time),
            status: TaskStatus::Pending,
            visible: true,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Human-readable due label: `"(date time)"`, `"(date)"`, `"(time)"`, or
    /// empty when neither part is present
    #[must_use]
    pub fn due_label(&self) -> String {
        let joined = [self.due_date.as_str(), self.due_time.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            String::new()
        } else {
            format!("({joined})")
        }
    }

    /// Full rendered text content, the haystack for substring search
    #[must_use]
    pub fn rendered_text(&self) -> String {
        let label = self.due_label();
        if label.is_empty() {
            self.description.clone()
        } else {
            format!("{} {}", self.description, label)
        }
    }
}

/// Parse `"{date}T{time}"` into epoch milliseconds, 0 when unparsable
fn parse_due_at(due_date: &str, due_time: &str) -> i64 {
    let combined = format!("{due_date}T{due_time}");

    // Time inputs usually omit seconds, but accept them when present
    let parsed = NaiveDateTime::parse_from_str(&combined, &format!("{DATE_FORMAT}T{TIME_FORMAT}"))
        .or_else(|_| NaiveDateTime::parse_from_str(&combined, &format!("{DATE_FORMAT}T{TIME_FORMAT}:%S")));

    match parsed {
        Ok(dt) => dt.and_utc().timestamp_millis(),
        Err(_) => 0,
    }
}
