use tasklist_core::{Priority, TaskId, TaskRecord, TaskStore};

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let mut store = TaskStore::new();
    let task = store.create("Ship release notes", Priority::High, "Work").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task.id().get());
    assert_eq!(json["text"], "Ship release notes");
    assert_eq!(json["completed"], false);
    assert_eq!(json["created_at"], task.created_at());
    assert_eq!(json["priority"], "high");
    assert_eq!(json["category"], "Work");

    let decoded: TaskRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_unknown_priority() {
    let value = serde_json::json!({
        "id": 1,
        "text": "bad priority",
        "completed": false,
        "created_at": 0,
        "priority": "urgent",
        "category": "Personal"
    });

    let err = serde_json::from_value::<TaskRecord>(value).unwrap_err();
    assert!(err.to_string().contains("urgent"), "unexpected error: {err}");
}

#[test]
fn task_id_displays_raw_value() {
    let id = TaskId::new(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!(id.get(), 42);
    assert_eq!(serde_json::to_value(id).unwrap(), 42);
}
