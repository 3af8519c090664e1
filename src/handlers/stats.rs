//! Stats handler: the overview counts shown above the task list

use crate::TaskTracker;
use crate::formatting;
use anyhow::Result;

impl TaskTracker {
    /// **Stats**: Summarize the collections.
    ///
    /// Counts total, pending, done, and pending-high-priority tasks in the
    /// active collection, plus the archive size.
    pub fn handle_stats(&self) -> Result<String> {
        Ok(formatting::format_stats(
            self.tasks.stats(),
            self.archive.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::TaskTracker;
    use tempfile::TempDir;

    #[test]
    fn test_stats_reflect_collections() {
        let dir = TempDir::new().unwrap();
        let mut tracker = TaskTracker::new(
            dir.path().join("tasks.toml"),
            dir.path().join("archive.toml"),
        )
        .unwrap();

        tracker.handle_add("One", None, "high", None, 0).unwrap();
        tracker.handle_add("Two", None, "low", None, 0).unwrap();
        tracker.handle_add("Three", None, "low", None, 0).unwrap();
        tracker.handle_complete(2).unwrap();
        tracker.handle_archive(3).unwrap();

        let reply = tracker.handle_stats().unwrap();
        assert_eq!(
            reply,
            "Total: 2   Pending: 1   Done: 1   High priority: 1   Archived: 1"
        );
    }
}
