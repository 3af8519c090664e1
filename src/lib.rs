//! Taskdesk Library
//!
//! This library provides the core of a single-user desktop task tracker:
//! a validated task domain model with per-task countdown timers, and
//! crash-safe file persistence with corruption quarantine.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Operation Layer**: [`TaskTracker`] - Maps user intents onto domain
//!   operations and persists after every mutation
//! - **Domain Layer**: `task` module - Task model, validation, and timer
//!   semantics
//! - **Persistence Layer**: `storage` module - Atomic TOML file storage
//!
//! The presentation layer (a GUI or the bundled CLI) owns transient view
//! state only - search text, filter selections, whether a countdown is
//! running - and drives the tracker one operation at a time. Execution is
//! single-threaded by design; there is exactly one mutator of the
//! in-memory collections at any moment.
//!
//! # Example
//!
//! ```no_run
//! use taskdesk::TaskTracker;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut tracker = TaskTracker::new("tasks.toml", "archive.toml")?;
//!     let reply = tracker.handle_add("Write report", None, "high", None, 1500)?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

mod error;
mod formatting;
mod handlers;
pub mod logging;
mod storage;
mod task;
mod validation;

use std::path::Path;

// Re-export commonly used types
pub use error::{PersistenceError, ValidationError};
pub use storage::Storage;
pub use task::{
    Priority, SortOrder, Stats, Status, Task, TaskDraft, TaskList, TaskPatch, local_datetime_now,
};

/// Operation surface for the task tracker
///
/// Owns the active and archived collections together with their storages.
/// Every mutating handler validates its input, applies the change in
/// memory, and writes the complete affected collection back to disk before
/// returning; a persistence failure leaves the in-memory state intact so
/// the operation can be retried.
pub struct TaskTracker {
    pub(crate) tasks: TaskList,
    pub(crate) archive: TaskList,
    pub(crate) storage: Storage,
    pub(crate) archive_storage: Storage,
}

impl TaskTracker {
    /// Create a tracker over the given data files
    ///
    /// Both collections are loaded once, here; corrupt files are
    /// quarantined by the storage layer and come back empty.
    ///
    /// # Arguments
    /// * `tasks_path` - Path to the active task file (TOML format)
    /// * `archive_path` - Path to the archive file (TOML format)
    pub fn new(
        tasks_path: impl AsRef<Path>,
        archive_path: impl AsRef<Path>,
    ) -> Result<Self, PersistenceError> {
        let storage = Storage::new(tasks_path);
        let archive_storage = Storage::new(archive_path);
        let tasks = storage.load()?;
        let archive = archive_storage.load()?;
        Ok(Self {
            tasks,
            archive,
            storage,
            archive_storage,
        })
    }

    /// The active task collection
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// The archived task collection
    pub fn archive(&self) -> &TaskList {
        &self.archive
    }

    /// Persist the active collection
    pub(crate) fn save_tasks(&self) -> Result<(), PersistenceError> {
        self.storage.save(&self.tasks)
    }

    /// Persist the archive collection
    pub(crate) fn save_archive(&self) -> Result<(), PersistenceError> {
        self.archive_storage.save(&self.archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn get_test_tracker() -> (TaskTracker, TempDir) {
        let dir = TempDir::new().unwrap();
        let tracker = TaskTracker::new(
            dir.path().join("tasks.toml"),
            dir.path().join("archive.toml"),
        )
        .unwrap();
        (tracker, dir)
    }

    #[test]
    fn test_new_tracker_starts_empty() {
        let (tracker, _dir) = get_test_tracker();
        assert!(tracker.tasks().is_empty());
        assert!(tracker.archive().is_empty());
    }

    #[test]
    fn test_custom_file_path() {
        let dir = TempDir::new().unwrap();
        let tasks_path = dir.path().join("tasks.toml");
        let archive_path = dir.path().join("archive.toml");

        let mut tracker = TaskTracker::new(&tasks_path, &archive_path).unwrap();
        assert_eq!(tracker.storage.file_path(), tasks_path.as_path());

        tracker
            .handle_add("Test Task", None, "medium", None, 0)
            .unwrap();
        assert!(tasks_path.exists());

        // A fresh tracker over the same files sees the saved task.
        let tracker2 = TaskTracker::new(&tasks_path, &archive_path).unwrap();
        assert_eq!(tracker2.tasks().len(), 1);
        assert_eq!(tracker2.tasks().find(1).unwrap().title, "Test Task");
    }

    #[test]
    fn test_state_survives_reload_after_mutations() {
        let dir = TempDir::new().unwrap();
        let tasks_path = dir.path().join("tasks.toml");
        let archive_path = dir.path().join("archive.toml");

        {
            let mut tracker = TaskTracker::new(&tasks_path, &archive_path).unwrap();
            tracker
                .handle_add("Keep", None, "low", None, 0)
                .unwrap();
            tracker
                .handle_add("Archive me", None, "high", None, 0)
                .unwrap();
            tracker.handle_archive(2).unwrap();
        }

        let tracker = TaskTracker::new(&tasks_path, &archive_path).unwrap();
        assert_eq!(tracker.tasks().len(), 1);
        assert_eq!(tracker.archive().len(), 1);
        assert_eq!(tracker.archive().find(2).unwrap().title, "Archive me");
    }
}
