use taskline::filter::FilterMode;
use taskline::store::{EditOutcome, TaskStore};
use taskline::task::{Task, TaskStatus};

#[test]
fn test_insert_orders_by_due_time() {
    let mut store = TaskStore::new();
    store.insert(Task::new("Buy milk", "2024-01-01", "09:00"));
    store.insert(Task::new("Call Bob", "2024-01-01", "08:00"));

    let descriptions: Vec<&str> = store.tasks().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Call Bob", "Buy milk"]);
}

#[test]
fn test_order_is_non_decreasing_after_many_inserts() {
    let mut store = TaskStore::new();
    store.insert(Task::new("c", "2024-03-01", "12:00"));
    store.insert(Task::new("a", "2024-01-01", "09:00"));
    store.insert(Task::new("d", "2024-12-31", "23:59"));
    store.insert(Task::new("b", "2024-01-01", "10:00"));

    let due_ats: Vec<i64> = store.tasks().iter().map(|t| t.due_at).collect();
    let mut sorted = due_ats.clone();
    sorted.sort();
    assert_eq!(due_ats, sorted);
}

#[test]
fn test_equal_due_times_keep_insertion_order() {
    let mut store = TaskStore::new();
    store.insert(Task::new("first", "2024-01-01", "09:00"));
    store.insert(Task::new("second", "2024-01-01", "09:00"));
    store.insert(Task::new("third", "2024-01-01", "09:00"));
    // An earlier task resorts the whole list; ties must not swap
    store.insert(Task::new("earliest", "2024-01-01", "08:00"));

    let descriptions: Vec<&str> = store.tasks().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["earliest", "first", "second", "third"]);
}

#[test]
fn test_unparsable_due_sorts_first() {
    let mut store = TaskStore::new();
    store.insert(Task::new("dated", "2024-01-01", "09:00"));
    store.insert(Task::new("broken", "not-a-date", "09:00"));

    assert_eq!(store.tasks()[0].description, "broken");
    assert_eq!(store.tasks()[0].due_at, 0);
}

#[test]
fn test_toggle_twice_restores_original_task() {
    let mut store = TaskStore::new();
    store.insert(Task::new("task", "2024-01-01", "09:00"));
    let id = store.tasks()[0].id;
    let before = store.get(id).unwrap().clone();

    assert_eq!(store.toggle_status(id), Some(TaskStatus::Completed));
    assert_eq!(store.toggle_status(id), Some(TaskStatus::Pending));
    assert_eq!(store.get(id).unwrap(), &before);
}

#[test]
fn test_remove_works_regardless_of_status() {
    let mut store = TaskStore::new();
    store.insert(Task::new("pending", "2024-01-01", "09:00"));
    store.insert(Task::new("done", "2024-01-01", "10:00"));
    let done_id = store.tasks()[1].id;
    store.toggle_status(done_id);

    assert!(store.remove(done_id).is_some());
    let pending_id = store.tasks()[0].id;
    assert!(store.remove(pending_id).is_some());
    assert!(store.is_empty());
}

#[test]
fn test_delete_completed_sweeps_only_completed() {
    let mut store = TaskStore::new();
    store.insert(Task::new("keep a", "2024-01-01", "09:00"));
    store.insert(Task::new("done a", "2024-01-01", "10:00"));
    store.insert(Task::new("keep b", "2024-01-01", "11:00"));
    store.insert(Task::new("done b", "2024-01-01", "12:00"));

    let done_a = store.tasks()[1].id;
    let done_b = store.tasks()[3].id;
    store.toggle_status(done_a);
    store.toggle_status(done_b);

    assert_eq!(store.delete_completed(), 2);
    let descriptions: Vec<&str> = store.tasks().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["keep a", "keep b"]);
}

#[test]
fn test_delete_completed_with_none_completed_is_noop() {
    let mut store = TaskStore::new();
    store.insert(Task::new("a", "2024-01-01", "09:00"));
    store.insert(Task::new("b", "2024-01-01", "10:00"));
    let before: Vec<_> = store.tasks().to_vec();

    assert_eq!(store.delete_completed(), 0);
    assert_eq!(store.tasks(), &before[..]);
}

#[test]
fn test_edit_description_trims_and_applies() {
    let mut store = TaskStore::new();
    store.insert(Task::new("old", "2024-01-01", "09:00"));
    let id = store.tasks()[0].id;

    assert_eq!(store.edit_description(id, "  New  "), EditOutcome::Applied);
    assert_eq!(store.get(id).unwrap().description, "New");
}

#[test]
fn test_edit_description_rejects_empty_and_keeps_prior_text() {
    let mut store = TaskStore::new();
    store.insert(Task::new("old", "2024-01-01", "09:00"));
    let id = store.tasks()[0].id;

    assert_eq!(store.edit_description(id, "   "), EditOutcome::RejectedEmpty);
    assert_eq!(store.get(id).unwrap().description, "old");
}

#[test]
fn test_edit_description_does_not_change_due_at() {
    let mut store = TaskStore::new();
    store.insert(Task::new("old", "2024-01-01", "09:00"));
    let id = store.tasks()[0].id;
    let due_at = store.get(id).unwrap().due_at;

    store.edit_description(id, "renamed");
    assert_eq!(store.get(id).unwrap().due_at, due_at);
}

#[test]
fn test_apply_filters_marks_visibility_without_reordering() {
    let mut store = TaskStore::new();
    store.insert(Task::new("a", "2024-01-01", "09:00"));
    store.insert(Task::new("b", "2024-01-01", "10:00"));
    let b_id = store.tasks()[1].id;
    store.toggle_status(b_id);

    store.apply_filters(FilterMode::Pending, "");
    let descriptions: Vec<&str> = store.tasks().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["a", "b"]);
    assert!(store.tasks()[0].visible);
    assert!(!store.tasks()[1].visible);
    assert_eq!(store.visible_count(), 1);
}
