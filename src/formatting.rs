//! Formatting helpers for displaying tasks and other output

use crate::task::{Stats, Task};

/// Format a number of seconds as a clock string
///
/// Durations under an hour render as `MM:SS`, longer ones as `H:MM:SS`.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Truncate text for one-line display
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Format tasks into a display string
///
/// # Arguments
/// * `tasks` - Tasks to format, already filtered and sorted
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} (status: {}, priority: {})\n",
            task.id,
            truncate(&task.title, 60),
            task.status,
            task.priority
        ));

        if let Some(ref description) = task.description {
            result.push_str(&format!("  Description: {}\n", truncate(description, 72)));
        }
        if let Some(due) = task.due_date {
            result.push_str(&format!("  Due: {}\n", due));
        }
        if task.has_timer() {
            result.push_str(&format!(
                "  Timer: {} / {}\n",
                format_duration(task.timer_remaining_seconds),
                format_duration(task.timer_total_seconds)
            ));
        }
        result.push_str(&format!("  Created: {}\n", task.created_at));
        if let Some(completed) = task.completed_at {
            result.push_str(&format!("  Completed: {}\n", completed));
        }
    }

    result
}

/// Format the overview counts
pub fn format_stats(active: Stats, archived: usize) -> String {
    format!(
        "Total: {}   Pending: {}   Done: {}   High priority: {}   Archived: {}",
        active.total, active.pending, active.done, active.high_priority, archived
    )
}
