//! Timer handlers: advance and reset a task's countdown
//!
//! The presentation layer owns the running/paused flag and simply stops
//! calling `handle_tick` while a countdown is paused; nothing about pause
//! state is persisted.

use crate::TaskTracker;
use anyhow::Result;
use log::info;

impl TaskTracker {
    /// **Tick**: Advance a task's countdown by elapsed seconds.
    ///
    /// Called on the presentation layer's cadence (typically once per
    /// second while a countdown runs). Reaching zero marks the task done.
    /// Done tasks and exhausted countdowns are untouched and not
    /// rewritten.
    pub fn handle_tick(&mut self, id: u64, elapsed_seconds: u32) -> Result<String> {
        let before = self
            .tasks
            .find(id)
            .map(|t| t.timer_remaining_seconds)
            .ok_or(crate::ValidationError::UnknownTask(id))?;
        let completed = self.tasks.tick(id, elapsed_seconds)?;

        let remaining = self
            .tasks
            .find(id)
            .map(|t| t.timer_remaining_seconds)
            .unwrap_or(0);
        if before == remaining {
            return Ok(format!("Task {} timer unchanged", id));
        }
        self.save_tasks()?;

        if completed {
            info!("timer expired, task {} auto-completed", id);
            Ok(format!("Task {} timer expired, marked done", id))
        } else {
            Ok(format!("Task {} timer at {}s", id, remaining))
        }
    }

    /// **Reset timer**: Refill a task's countdown to its configured total.
    pub fn handle_reset_timer(&mut self, id: u64) -> Result<String> {
        let remaining = self.tasks.reset_timer(id)?.timer_remaining_seconds;
        self.save_tasks()?;

        info!("reset timer for task {}", id);
        Ok(format!("Task {} timer reset to {}s", id, remaining))
    }
}
