use crate::error::ValidationError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date and time in local timezone
pub fn local_datetime_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Task priority level
///
/// Uses snake_case naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Needs attention first
    high,
    /// Normal workload
    medium,
    /// Can wait
    low,
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::high),
            "medium" => Ok(Priority::medium),
            "low" => Ok(Priority::low),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::high => write!(f, "high"),
            Priority::medium => write!(f, "medium"),
            Priority::low => write!(f, "low"),
        }
    }
}

/// Task completion status
///
/// Uses snake_case naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Not yet completed
    pending,
    /// Completed, either manually or by timer expiry
    done,
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::pending),
            "done" => Ok(Status::done),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::pending => write!(f, "pending"),
            Status::done => write!(f, "done"),
        }
    }
}

/// A tracked task
///
/// Tasks are created through [`TaskList::create`](crate::task::TaskList::create),
/// which assigns the id and creation timestamp. The `id` and `created_at`
/// fields are immutable afterwards.
///
/// Optional fields carry `#[serde(default)]` so files written by older
/// versions still load; unknown extra fields on a record are ignored.
/// Missing required fields or out-of-range enum values fail the parse and
/// are handled by the storage quarantine path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned from the collection counter
    pub id: u64,
    /// Title describing the task (non-empty)
    pub title: String,
    /// Optional free-form details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority level (high, medium, low)
    pub priority: Priority,
    /// Completion status (pending, done)
    pub status: Status,
    /// Timestamp when the task was created
    pub created_at: NaiveDateTime,
    /// Optional target date (format: YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Timestamp when the task was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
    /// Total countdown duration configured for the task, in seconds
    pub timer_total_seconds: u32,
    /// Seconds left on the countdown, never above `timer_total_seconds`
    pub timer_remaining_seconds: u32,
}

impl Task {
    /// Check if this task is still pending
    pub fn is_pending(&self) -> bool {
        self.status == Status::pending
    }

    /// Check if this task is completed
    pub fn is_done(&self) -> bool {
        self.status == Status::done
    }

    /// Check if this task has a countdown configured
    pub fn has_timer(&self) -> bool {
        self.timer_total_seconds > 0
    }

    /// Advance the countdown by `elapsed_seconds`
    ///
    /// Decrements the remaining time, floored at zero. A transition to zero
    /// while the task is pending marks it done and stamps `completed_at`.
    /// Calling this on a done task, or on a task whose countdown is already
    /// exhausted (including tasks with no timer configured), is a no-op.
    ///
    /// Whether the countdown is currently running or paused is presentation
    /// state; callers simply stop invoking this while paused.
    ///
    /// # Arguments
    /// * `elapsed_seconds` - Seconds to subtract from the remaining time
    ///
    /// # Returns
    /// `true` if this call completed the task
    pub fn tick(&mut self, elapsed_seconds: u32) -> bool {
        if self.is_done() || self.timer_remaining_seconds == 0 {
            return false;
        }
        self.timer_remaining_seconds = self
            .timer_remaining_seconds
            .saturating_sub(elapsed_seconds);
        if self.timer_remaining_seconds == 0 {
            self.status = Status::done;
            self.completed_at = Some(local_datetime_now());
            return true;
        }
        false
    }

    /// Check whether this task passes a search query and optional filters
    ///
    /// The query is a case-insensitive substring match against the title;
    /// an empty (or whitespace-only) query matches every task. The status
    /// and priority filters are exact matches when present.
    pub fn matches(
        &self,
        query: &str,
        status: Option<Status>,
        priority: Option<Priority>,
    ) -> bool {
        if let Some(s) = status
            && self.status != s
        {
            return false;
        }
        if let Some(p) = priority
            && self.priority != p
        {
            return false;
        }
        let query = query.trim();
        query.is_empty()
            || self
                .title
                .to_lowercase()
                .contains(&query.to_lowercase())
    }
}

/// Field values for a task that does not exist yet
///
/// Built by the validation boundary from raw user input; `TaskList::create`
/// turns it into a stored [`Task`] after validating the title.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub timer_total_seconds: u32,
}

/// A partial set of field changes for an existing task
///
/// `None` leaves a field untouched. For optional task fields the inner
/// `Option` distinguishes setting a value (`Some(Some(v))`) from clearing
/// it (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub timer_total_seconds: Option<u32>,
    pub timer_remaining_seconds: Option<u32>,
}

impl TaskPatch {
    /// Check if this patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.timer_total_seconds.is_none()
            && self.timer_remaining_seconds.is_none()
    }

    /// Apply the patch to a task value
    ///
    /// Mutates `task` in place without validating the result; callers
    /// validate the merged task before storing it.
    pub(crate) fn apply(&self, task: &mut Task) {
        if let Some(ref title) = self.title {
            task.title = title.clone();
        }
        if let Some(ref description) = self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(total) = self.timer_total_seconds {
            task.timer_total_seconds = total;
            // A fresh countdown duration also restarts the remaining time
            // unless the caller patched it explicitly.
            if self.timer_remaining_seconds.is_none() {
                task.timer_remaining_seconds = total;
            }
        }
        if let Some(remaining) = self.timer_remaining_seconds {
            task.timer_remaining_seconds = remaining;
        }
    }
}
