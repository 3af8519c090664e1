//! Archive handlers: move tasks out of the active list and back

use crate::TaskTracker;
use crate::error::ValidationError;
use anyhow::Result;
use log::info;

impl TaskTracker {
    /// **Archive**: Move a task from the active collection to the archive.
    ///
    /// The task keeps its id and status; archival is membership in the
    /// archive collection, not a status value. Both files are written.
    pub fn handle_archive(&mut self, id: u64) -> Result<String> {
        // Refuse before touching the active list so a failure never strands
        // the task outside both collections.
        if self.archive.find(id).is_some() {
            return Err(ValidationError::DuplicateId(id).into());
        }
        let task = self
            .tasks
            .remove(id)
            .ok_or(ValidationError::UnknownTask(id))?;
        let title = task.title.clone();

        self.archive.adopt(task)?;
        self.save_tasks()?;
        self.save_archive()?;

        info!(
            "archived task {}: {}. Archive now holds {} task(s)",
            id,
            title,
            self.archive.len()
        );
        Ok(format!("Task {} archived", id))
    }

    /// **Restore**: Move an archived task back into the active collection.
    ///
    /// The restored task is reopened as pending, matching the archive
    /// panel's restore action.
    pub fn handle_restore(&mut self, id: u64) -> Result<String> {
        if self.tasks.find(id).is_some() {
            return Err(ValidationError::DuplicateId(id).into());
        }
        let task = self
            .archive
            .remove(id)
            .ok_or(ValidationError::UnknownTask(id))?;
        let title = task.title.clone();

        self.tasks.adopt(task)?;
        self.tasks.reopen(id)?;
        self.save_tasks()?;
        self.save_archive()?;

        info!("restored task {}: {}", id, title);
        Ok(format!("Task {} restored", id))
    }

    /// **Delete**: Permanently remove a task.
    ///
    /// Looks in the archive first, then the active collection. This is
    /// the only destructive operation; everything else keeps the task
    /// bytes somewhere on disk.
    pub fn handle_delete(&mut self, id: u64) -> Result<String> {
        if let Some(task) = self.archive.remove(id) {
            self.save_archive()?;
            info!("permanently deleted archived task {}: {}", id, task.title);
            return Ok(format!("Task {} permanently deleted", id));
        }
        if let Some(task) = self.tasks.remove(id) {
            self.save_tasks()?;
            info!("permanently deleted task {}: {}", id, task.title);
            return Ok(format!("Task {} permanently deleted", id));
        }
        Err(ValidationError::UnknownTask(id).into())
    }
}
