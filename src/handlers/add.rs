//! Add handler: create a new task

use crate::TaskTracker;
use crate::task::TaskDraft;
use crate::validation;
use anyhow::Result;
use log::info;

impl TaskTracker {
    /// **Add**: Create a new task and persist the collection.
    ///
    /// The id and creation timestamp are assigned here; the task starts
    /// pending with a full countdown. Validation failures (empty title,
    /// priority outside high/medium/low, malformed due date) leave the
    /// collection unchanged.
    ///
    /// # Arguments
    /// * `title` - Task title (required, non-empty)
    /// * `description` - Optional details
    /// * `priority` - Priority: high/medium/low
    /// * `due_date` - Optional target date, YYYY-MM-DD
    /// * `timer_total_seconds` - Countdown duration, 0 for no timer
    pub fn handle_add(
        &mut self,
        title: &str,
        description: Option<&str>,
        priority: &str,
        due_date: Option<&str>,
        timer_total_seconds: u32,
    ) -> Result<String> {
        let priority = validation::parse_priority(priority)?;
        let due_date = match due_date {
            Some(s) if !s.trim().is_empty() => Some(validation::parse_date(s)?),
            _ => None,
        };

        let draft = TaskDraft {
            title: title.to_string(),
            description: description.map(str::to_string),
            priority,
            due_date,
            timer_total_seconds,
        };
        let id = self.tasks.create(draft)?.id;
        self.save_tasks()?;

        info!("added task {}: {}", id, title.trim());
        Ok(format!("Task created with ID: {}", id))
    }
}
