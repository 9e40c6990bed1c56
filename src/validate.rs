//! Input validation for new tasks
//!
//! Rules are evaluated in a fixed order and the first violation wins: a
//! combined all-fields-missing message takes priority over the field-specific
//! ones. Each rejection names the input field that should receive focus.

use thiserror::Error;

/// The three input fields of the add-task form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskField {
    #[default]
    Description,
    DueDate,
    DueTime,
}

/// Why a new-task submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the task, date, and time first.")]
    AllFieldsMissing,
    #[error("Please fill in the task first.")]
    DescriptionMissing,
    #[error("Please fill in the date first.")]
    DateMissing,
    #[error("Please fill in the time first.")]
    TimeMissing,
}

impl ValidationError {
    /// Which field should receive focus after the user acknowledges the error
    #[must_use]
    pub fn focus_field(&self) -> TaskField {
        match self {
            Self::AllFieldsMissing | Self::DescriptionMissing => TaskField::Description,
            Self::DateMissing => TaskField::DueDate,
            Self::TimeMissing => TaskField::DueTime,
        }
    }
}

/// Check raw form input before a task is admitted.
///
/// Only presence is checked; a present but unparsable date/time is accepted
/// and degrades to a zero due timestamp downstream.
pub fn validate_new_task(description: &str, due_date: &str, due_time: &str) -> Result<(), ValidationError> {
    let description = description.trim();

    if description.is_empty() && due_date.is_empty() && due_time.is_empty() {
        return Err(ValidationError::AllFieldsMissing);
    }
    if description.is_empty() {
        return Err(ValidationError::DescriptionMissing);
    }
    if due_date.is_empty() {
        return Err(ValidationError::DateMissing);
    }
    if due_time.is_empty() {
        return Err(ValidationError::TimeMissing);
    }

    Ok(())
}
