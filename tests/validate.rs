use taskline::validate::{validate_new_task, TaskField, ValidationError};

#[test]
fn test_all_fields_missing_wins_over_field_specific_messages() {
    assert_eq!(
        validate_new_task("", "", ""),
        Err(ValidationError::AllFieldsMissing)
    );
    // Whitespace-only description counts as missing
    assert_eq!(
        validate_new_task("   ", "", ""),
        Err(ValidationError::AllFieldsMissing)
    );
}

#[test]
fn test_description_missing() {
    assert_eq!(
        validate_new_task("", "2024-01-01", "09:00"),
        Err(ValidationError::DescriptionMissing)
    );
    assert_eq!(
        validate_new_task("", "2024-01-01", ""),
        Err(ValidationError::DescriptionMissing)
    );
}

#[test]
fn test_date_missing_checked_before_time() {
    assert_eq!(
        validate_new_task("Buy milk", "", ""),
        Err(ValidationError::DateMissing)
    );
    assert_eq!(
        validate_new_task("Buy milk", "", "09:00"),
        Err(ValidationError::DateMissing)
    );
}

#[test]
fn test_time_missing() {
    assert_eq!(
        validate_new_task("Buy milk", "2024-01-01", ""),
        Err(ValidationError::TimeMissing)
    );
}

#[test]
fn test_complete_input_accepted() {
    assert_eq!(validate_new_task("Buy milk", "2024-01-01", "09:00"), Ok(()));
}

#[test]
fn test_unparsable_but_present_values_accepted() {
    // Presence-only validation: garbage date/time is admitted deliberately
    assert_eq!(validate_new_task("Buy milk", "soon", "ish"), Ok(()));
}

#[test]
fn test_focus_goes_to_first_offending_field() {
    assert_eq!(
        ValidationError::AllFieldsMissing.focus_field(),
        TaskField::Description
    );
    assert_eq!(
        ValidationError::DescriptionMissing.focus_field(),
        TaskField::Description
    );
    assert_eq!(ValidationError::DateMissing.focus_field(), TaskField::DueDate);
    assert_eq!(ValidationError::TimeMissing.focus_field(), TaskField::DueTime);
}

#[test]
fn test_messages_name_the_missing_field() {
    assert_eq!(
        ValidationError::AllFieldsMissing.to_string(),
        "Please fill in the task, date, and time first."
    );
    assert_eq!(
        ValidationError::DescriptionMissing.to_string(),
        "Please fill in the task first."
    );
    assert_eq!(
        ValidationError::DateMissing.to_string(),
        "Please fill in the date first."
    );
    assert_eq!(
        ValidationError::TimeMissing.to_string(),
        "Please fill in the time first."
    );
}
