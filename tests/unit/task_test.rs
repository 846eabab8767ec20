//! Tests for the task model

use taskdeck::models::{Task, TaskId};

// =============================================================================
// TASK ID TESTS
// =============================================================================

#[test]
fn test_task_id_display() {
    assert_eq!(TaskId::new(7).to_string(), "7");
}

#[test]
fn test_task_id_from_str_plain() {
    assert_eq!("3".parse::<TaskId>().unwrap(), TaskId::new(3));
}

#[test]
fn test_task_id_from_str_hash_prefixed() {
    assert_eq!("#12".parse::<TaskId>().unwrap(), TaskId::new(12));
}

#[test]
fn test_task_id_from_str_invalid() {
    let result = "abc".parse::<TaskId>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Invalid task id"));
}

#[test]
fn test_task_id_from_str_negative_invalid() {
    assert!("-1".parse::<TaskId>().is_err());
}

#[test]
fn test_task_id_serializes_as_bare_number() {
    let value = serde_json::to_value(TaskId::new(5)).unwrap();
    assert_eq!(value, serde_json::json!(5));
}

// =============================================================================
// TASK TESTS
// =============================================================================

#[test]
fn test_task_new() {
    let task = Task::new(TaskId::new(1), "Buy milk".to_string());

    assert_eq!(task.id, TaskId::new(1));
    assert_eq!(task.content, "Buy milk");
    assert!(!task.completed);
    assert!(task.created_at <= chrono::Utc::now());
}

#[test]
fn test_task_round_trips_through_json() {
    let task = Task::new(TaskId::new(3), "Walk dog".to_string());

    let json = serde_json::to_string(&task).unwrap();
    let back: Task = serde_json::from_str(&json).unwrap();

    assert_eq!(back, task);
}

#[test]
fn test_task_created_at_serializes_as_rfc3339() {
    let task = Task::new(TaskId::new(1), "Buy milk".to_string());

    let value = serde_json::to_value(&task).unwrap();
    let created = value["created_at"].as_str().unwrap();
    assert!(created.contains('T'), "expected RFC 3339 timestamp, got {created}");
}
