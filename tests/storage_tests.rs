//! Storage round-trip, atomicity, and corruption-fallback tests

use std::fs;
use taskdesk::{Priority, Storage, TaskDraft, TaskList};
use tempfile::TempDir;

fn seeded_list() -> TaskList {
    let mut list = TaskList::new();
    list.create(TaskDraft {
        title: "Write report".to_string(),
        description: Some("Q3 numbers".to_string()),
        priority: Priority::high,
        due_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1),
        timer_total_seconds: 1500,
    })
    .unwrap();
    list.create(TaskDraft {
        title: "Water plants".to_string(),
        description: None,
        priority: Priority::low,
        due_date: None,
        timer_total_seconds: 0,
    })
    .unwrap();
    list
}

#[test]
fn test_load_missing_file_returns_empty() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("tasks.toml"));

    let tasks = storage.load().unwrap();
    assert!(tasks.is_empty());
    // An absent file is not a corruption event.
    assert!(!storage.backup_path().exists());
}

#[test]
fn test_round_trip_preserves_content() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("tasks.toml"));
    let list = seeded_list();

    storage.save(&list).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(list, loaded);
}

#[test]
fn test_idempotent_save() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("tasks.toml"));
    let list = seeded_list();

    storage.save(&list).unwrap();
    let first = fs::read_to_string(storage.file_path()).unwrap();
    storage.save(&list).unwrap();
    let second = fs::read_to_string(storage.file_path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(storage.load().unwrap(), list);
}

#[test]
fn test_corrupt_file_is_quarantined() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    let garbage = "this is [ not valid toml =";
    fs::write(&path, garbage).unwrap();

    let tasks = storage.load().unwrap();
    assert!(tasks.is_empty());

    let backup = storage.backup_path();
    assert!(backup.exists());
    assert_eq!(fs::read_to_string(&backup).unwrap(), garbage);
}

#[test]
fn test_backup_is_overwritten_on_each_corruption() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    fs::write(&path, "first garbage").unwrap();
    storage.load().unwrap();
    fs::write(&path, "second garbage").unwrap();
    storage.load().unwrap();

    assert_eq!(
        fs::read_to_string(storage.backup_path()).unwrap(),
        "second garbage"
    );
}

#[test]
fn test_out_of_enum_value_takes_corruption_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    fs::write(
        &path,
        r#"
[[tasks]]
id = 1
title = "Broken"
priority = "urgent"
status = "pending"
created_at = "2026-08-01T10:00:00"
timer_total_seconds = 0
timer_remaining_seconds = 0
"#,
    )
    .unwrap();

    assert!(storage.load().unwrap().is_empty());
    assert!(storage.backup_path().exists());
}

#[test]
fn test_missing_required_field_takes_corruption_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    // No title on the record.
    fs::write(
        &path,
        r#"
[[tasks]]
id = 1
priority = "low"
status = "pending"
created_at = "2026-08-01T10:00:00"
timer_total_seconds = 0
timer_remaining_seconds = 0
"#,
    )
    .unwrap();

    assert!(storage.load().unwrap().is_empty());
    assert!(storage.backup_path().exists());
}

#[test]
fn test_duplicate_ids_take_corruption_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    let record = r#"
[[tasks]]
id = 1
title = "Twin"
priority = "low"
status = "pending"
created_at = "2026-08-01T10:00:00"
timer_total_seconds = 0
timer_remaining_seconds = 0
"#;
    fs::write(&path, format!("{record}{record}")).unwrap();

    assert!(storage.load().unwrap().is_empty());
    assert!(storage.backup_path().exists());
}

#[test]
fn test_timer_overrun_takes_corruption_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    fs::write(
        &path,
        r#"
[[tasks]]
id = 1
title = "Overrun"
priority = "low"
status = "pending"
created_at = "2026-08-01T10:00:00"
timer_total_seconds = 10
timer_remaining_seconds = 60
"#,
    )
    .unwrap();

    assert!(storage.load().unwrap().is_empty());
    assert!(storage.backup_path().exists());
}

#[test]
fn test_unknown_record_fields_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    fs::write(
        &path,
        r##"
[[tasks]]
id = 1
title = "Forward compatible"
priority = "medium"
status = "done"
created_at = "2026-08-01T10:00:00"
timer_total_seconds = 0
timer_remaining_seconds = 0
badge_color = "#f43f5e"
"##,
    )
    .unwrap();

    let tasks = storage.load().unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(!storage.backup_path().exists());
}

#[test]
fn test_stray_temp_file_does_not_affect_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);
    let list = seeded_list();
    storage.save(&list).unwrap();

    // Simulate a writer interrupted after the temp write but before the
    // rename: a half-written sibling must not disturb the live file.
    fs::write(dir.path().join(".tmpXYZ123"), "[[tasks]]\nid = 9").unwrap();

    assert_eq!(storage.load().unwrap(), list);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("no_such_dir").join("tasks.toml"));

    // The temp file cannot be created, so the error surfaces instead of
    // silently dropping the collection.
    assert!(storage.save(&seeded_list()).is_err());
}

#[test]
fn test_failed_replace_leaves_previous_file_intact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let storage = Storage::new(&path);

    let original = seeded_list();
    storage.save(&original).unwrap();

    // Turn the live path into a directory: the temp write succeeds but the
    // final rename cannot, and the error must surface.
    let bytes = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let mut changed = original.clone();
    changed.complete(1).unwrap();
    assert!(storage.save(&changed).is_err());

    // Restore the previous file; its content is the pre-write collection.
    fs::remove_dir(&path).unwrap();
    fs::write(&path, bytes).unwrap();
    assert_eq!(storage.load().unwrap(), original);
}
