use taskline::task::{Task, TaskStatus};

#[test]
fn test_new_task_trims_description_and_defaults_to_pending() {
    let task = Task::new("  Buy milk  ", "2024-01-01", "09:00");
    assert_eq!(task.description, "Buy milk");
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.visible);
}

#[test]
fn test_due_at_is_epoch_millis_of_date_plus_time() {
    let task = Task::new("task", "2024-01-01", "09:00");
    // 2024-01-01T09:00:00Z
    assert_eq!(task.due_at, 1_704_099_600_000);
}

#[test]
fn test_unparsable_due_degrades_to_zero() {
    assert_eq!(Task::new("task", "tomorrow", "09:00").due_at, 0);
    assert_eq!(Task::new("task", "2024-01-01", "late").due_at, 0);
    assert_eq!(Task::new("task", "2024-13-99", "09:00").due_at, 0);
}

#[test]
fn test_due_label_with_both_parts() {
    let task = Task::new("task", "2024-01-01", "09:00");
    assert_eq!(task.due_label(), "(2024-01-01 09:00)");
}

#[test]
fn test_due_label_with_one_part() {
    let date_only = Task::new("task", "2024-01-01", "");
    assert_eq!(date_only.due_label(), "(2024-01-01)");

    let time_only = Task::new("task", "", "09:00");
    assert_eq!(time_only.due_label(), "(09:00)");
}

#[test]
fn test_due_label_empty_when_no_parts() {
    let task = Task::new("task", "", "");
    assert_eq!(task.due_label(), "");
}

#[test]
fn test_rendered_text_combines_description_and_label() {
    let task = Task::new("Buy milk", "2024-01-01", "09:00");
    assert_eq!(task.rendered_text(), "Buy milk (2024-01-01 09:00)");

    let bare = Task::new("Buy milk", "", "");
    assert_eq!(bare.rendered_text(), "Buy milk");
}

#[test]
fn test_status_toggle_round_trip() {
    assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
    assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    assert_eq!(TaskStatus::Pending.toggled().toggled(), TaskStatus::Pending);
}

#[test]
fn test_tasks_get_distinct_ids() {
    let a = Task::new("same", "2024-01-01", "09:00");
    let b = Task::new("same", "2024-01-01", "09:00");
    assert_ne!(a.id, b.id);
}
