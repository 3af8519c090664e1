use crate::error::ValidationError;
use crate::task::model::{Status, Task, TaskDraft, TaskPatch, local_datetime_now};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn counter_is_zero(counter: &u64) -> bool {
    *counter == 0
}

/// The ordered task collection, the unit of persistence
///
/// A `Vec` is used as the primary storage for several reasons:
/// 1. Maintains insertion order for consistent TOML serialization
/// 2. Enables predictable iteration order for display
/// 3. Simple ownership model - the `Vec` owns all data directly
///
/// The `task_counter` is serialized alongside the tasks so ids are never
/// reused within a file's lifetime, even after the highest-numbered task
/// is deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    /// Counter for generating unique task ids
    #[serde(default, skip_serializing_if = "counter_is_zero")]
    pub task_counter: u64,

    /// All tasks in creation order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Create a new empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks in the collection
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the tasks in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Find a task by its id
    pub fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its id and return a mutable reference
    fn find_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Generate a new unique task id
    ///
    /// The counter first catches up with the highest id already present so
    /// hand-edited files cannot cause collisions.
    pub fn generate_task_id(&mut self) -> u64 {
        let max_id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        self.task_counter = self.task_counter.max(max_id);
        self.task_counter += 1;
        self.task_counter
    }

    /// Create a new task from a draft
    ///
    /// Assigns the id and creation timestamp, starts the task as pending
    /// with a full countdown, and appends it to the collection.
    ///
    /// # Errors
    /// `ValidationError::EmptyTitle` if the trimmed title is empty; the
    /// collection is unchanged in that case.
    pub fn create(&mut self, draft: TaskDraft) -> Result<&Task, ValidationError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let id = self.generate_task_id();
        let task = Task {
            id,
            title,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            priority: draft.priority,
            status: Status::pending,
            created_at: local_datetime_now(),
            due_date: draft.due_date,
            completed_at: None,
            timer_total_seconds: draft.timer_total_seconds,
            timer_remaining_seconds: draft.timer_total_seconds,
        };
        self.tasks.push(task);
        Ok(self.tasks.last().expect("task was just pushed"))
    }

    /// Apply a partial edit to an existing task
    ///
    /// The patch is applied to a clone and the merged result is validated;
    /// only then does it replace the stored task. On a validation failure
    /// the stored task is untouched.
    ///
    /// # Errors
    /// `UnknownTask` if no task has the given id, `EmptyTitle` or
    /// `TimerOutOfRange` if the merged result would violate an invariant.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Result<&Task, ValidationError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(ValidationError::UnknownTask(id))?;

        let mut merged = self.tasks[pos].clone();
        patch.apply(&mut merged);
        merged.title = merged.title.trim().to_string();

        if merged.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if merged.timer_remaining_seconds > merged.timer_total_seconds {
            return Err(ValidationError::TimerOutOfRange {
                remaining: merged.timer_remaining_seconds,
                total: merged.timer_total_seconds,
            });
        }

        self.tasks[pos] = merged;
        Ok(&self.tasks[pos])
    }

    /// Mark a task done and stamp its completion time
    ///
    /// Marking an already-done task again is a no-op.
    pub fn complete(&mut self, id: u64) -> Result<&Task, ValidationError> {
        let task = self
            .find_mut(id)
            .ok_or(ValidationError::UnknownTask(id))?;
        if task.is_pending() {
            task.status = Status::done;
            task.completed_at = Some(local_datetime_now());
        }
        Ok(task)
    }

    /// Reopen a completed task
    ///
    /// Clears the completion stamp and, when the countdown was exhausted,
    /// refills it from the configured total so the timer can run again.
    pub fn reopen(&mut self, id: u64) -> Result<&Task, ValidationError> {
        let task = self
            .find_mut(id)
            .ok_or(ValidationError::UnknownTask(id))?;
        task.status = Status::pending;
        task.completed_at = None;
        if task.timer_remaining_seconds == 0 {
            task.timer_remaining_seconds = task.timer_total_seconds;
        }
        Ok(task)
    }

    /// Advance a task's countdown by `elapsed_seconds`
    ///
    /// # Returns
    /// `true` if the tick completed the task
    pub fn tick(&mut self, id: u64, elapsed_seconds: u32) -> Result<bool, ValidationError> {
        let task = self
            .find_mut(id)
            .ok_or(ValidationError::UnknownTask(id))?;
        Ok(task.tick(elapsed_seconds))
    }

    /// Reset a task's countdown back to its configured total
    pub fn reset_timer(&mut self, id: u64) -> Result<&Task, ValidationError> {
        let task = self
            .find_mut(id)
            .ok_or(ValidationError::UnknownTask(id))?;
        task.timer_remaining_seconds = task.timer_total_seconds;
        Ok(task)
    }

    /// Remove a task from the collection and return it
    pub fn remove(&mut self, id: u64) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Adopt a task from another collection, keeping its id
    ///
    /// Used when moving tasks between the active list and the archive.
    /// Bumps the counter past the adopted id so future ids stay unique.
    ///
    /// # Errors
    /// `DuplicateId` if a task with the same id already exists here.
    pub fn adopt(&mut self, task: Task) -> Result<&Task, ValidationError> {
        if self.find(task.id).is_some() {
            return Err(ValidationError::DuplicateId(task.id));
        }
        self.task_counter = self.task_counter.max(task.id);
        self.tasks.push(task);
        Ok(self.tasks.last().expect("task was just pushed"))
    }

    /// Check the collection-wide invariants
    ///
    /// Used by the storage layer after a successful parse: a file that
    /// decodes but violates these is treated the same as one that does not
    /// parse at all.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if !seen.insert(task.id) {
                return Err(ValidationError::DuplicateId(task.id));
            }
            if task.title.trim().is_empty() {
                return Err(ValidationError::EmptyTitle);
            }
            if task.timer_remaining_seconds > task.timer_total_seconds {
                return Err(ValidationError::TimerOutOfRange {
                    remaining: task.timer_remaining_seconds,
                    total: task.timer_total_seconds,
                });
            }
        }
        Ok(())
    }
}
