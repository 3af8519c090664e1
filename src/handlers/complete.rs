//! Completion handlers: mark tasks done and reopen them

use crate::TaskTracker;
use anyhow::Result;
use log::info;

impl TaskTracker {
    /// **Done**: Mark a task completed.
    ///
    /// Stamps the completion time; marking an already-done task again is
    /// harmless.
    pub fn handle_complete(&mut self, id: u64) -> Result<String> {
        let title = self.tasks.complete(id)?.title.clone();
        self.save_tasks()?;

        info!("marked done task {}: {}", id, title);
        Ok(format!("Task {} marked done", id))
    }

    /// **Reopen**: Put a completed task back into pending.
    ///
    /// Clears the completion stamp; an exhausted countdown is refilled
    /// from the configured total so the timer can run again.
    pub fn handle_reopen(&mut self, id: u64) -> Result<String> {
        let title = self.tasks.reopen(id)?.title.clone();
        self.save_tasks()?;

        info!("reopened task {}: {}", id, title);
        Ok(format!("Task {} reopened", id))
    }
}
