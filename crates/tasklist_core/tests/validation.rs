use tasklist_core::{
    validate_task_text, Priority, TaskStore, ValidationError, MAX_TASK_TEXT_CHARS,
    MIN_TASK_TEXT_CHARS,
};

#[test]
fn rejects_blank_text_as_empty() {
    assert_eq!(
        validate_task_text("   \t ", &[]).unwrap_err(),
        ValidationError::EmptyText
    );
    assert_eq!(validate_task_text("", &[]).unwrap_err(), ValidationError::EmptyText);
}

#[test]
fn length_boundaries_apply_to_trimmed_text() {
    assert_eq!(
        validate_task_text("ab", &[]).unwrap_err(),
        ValidationError::TooShort
    );
    assert_eq!(validate_task_text("  abc  ", &[]).unwrap(), "abc");

    let max = "x".repeat(MAX_TASK_TEXT_CHARS);
    assert_eq!(validate_task_text(&max, &[]).unwrap(), max);

    let over = "x".repeat(MAX_TASK_TEXT_CHARS + 1);
    assert_eq!(
        validate_task_text(&over, &[]).unwrap_err(),
        ValidationError::TooLong
    );
    assert_eq!(MIN_TASK_TEXT_CHARS, 3);
}

#[test]
fn duplicate_check_ignores_case_and_whitespace() {
    let mut store = TaskStore::new();
    store.create("Buy milk", Priority::Low, "Personal").unwrap();

    assert_eq!(
        validate_task_text("buy milk ", store.tasks()).unwrap_err(),
        ValidationError::DuplicateText
    );
    assert_eq!(
        validate_task_text("Buy milk today", store.tasks()).unwrap(),
        "Buy milk today"
    );
}

#[test]
fn first_failing_rule_wins() {
    let mut store = TaskStore::new();
    store.create("abc", Priority::Low, "Personal").unwrap();

    // Too short wins over duplicate because length is checked first.
    assert_eq!(
        validate_task_text("ab", store.tasks()).unwrap_err(),
        ValidationError::TooShort
    );
}

#[test]
fn validation_is_repeatable_for_same_input() {
    let mut store = TaskStore::new();
    store.create("Walk the dog", Priority::High, "Home").unwrap();

    let first = validate_task_text("walk the dog", store.tasks());
    let second = validate_task_text("walk the dog", store.tasks());
    assert_eq!(first, second);

    let first = validate_task_text("Feed the cat", store.tasks());
    let second = validate_task_text("Feed the cat", store.tasks());
    assert_eq!(first, second);
}

#[test]
fn error_messages_and_codes_are_stable() {
    assert_eq!(ValidationError::EmptyText.to_string(), "Task cannot be empty");
    assert_eq!(
        ValidationError::TooShort.to_string(),
        "Task must be at least 3 characters long"
    );
    assert_eq!(
        ValidationError::TooLong.to_string(),
        "Task cannot exceed 100 characters"
    );
    assert_eq!(
        ValidationError::DuplicateText.to_string(),
        "This task already exists"
    );
    assert_eq!(ValidationError::DuplicateText.as_code(), "duplicate_text");
}
