//! Update handler: apply a partial edit to an existing task
//!
//! **Tip**: Use empty string "" to clear optional fields.

use crate::TaskTracker;
use crate::task::TaskPatch;
use crate::validation;
use anyhow::Result;
use log::info;

impl TaskTracker {
    /// **Update**: Change task fields, re-validating the merged result.
    ///
    /// Fields left as `None` stay untouched; optional fields passed as an
    /// empty string are cleared. On a validation failure the stored task
    /// is unchanged and nothing is written.
    ///
    /// # Arguments
    /// * `id` - Id of the task to update
    /// * `title` - New title (optional)
    /// * `description` - New details, ""=clear (optional)
    /// * `priority` - New priority: high/medium/low (optional)
    /// * `due_date` - New target date YYYY-MM-DD, ""=clear (optional)
    /// * `timer_total_seconds` - New countdown duration; restarts the
    ///   remaining time unless it is patched too (optional)
    /// * `timer_remaining_seconds` - New remaining time, must not exceed
    ///   the total (optional)
    #[allow(clippy::too_many_arguments)]
    pub fn handle_update(
        &mut self,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
        due_date: Option<&str>,
        timer_total_seconds: Option<u32>,
        timer_remaining_seconds: Option<u32>,
    ) -> Result<String> {
        let priority = match priority {
            Some(s) => Some(validation::parse_priority(s)?),
            None => None,
        };

        let patch = TaskPatch {
            title: title.map(str::to_string),
            description: validation::parse_text_patch(description),
            priority,
            due_date: validation::parse_date_patch(due_date)?,
            timer_total_seconds,
            timer_remaining_seconds,
        };

        if self.tasks.find(id).is_none() {
            return Err(crate::ValidationError::UnknownTask(id).into());
        }
        if patch.is_empty() {
            return Ok(format!("Task {} unchanged", id));
        }

        self.tasks.update(id, patch)?;
        self.save_tasks()?;

        info!("updated task {}", id);
        Ok(format!("Task {} updated successfully", id))
    }
}
