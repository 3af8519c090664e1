//! Query helpers over the task collection
//!
//! Pure read-only views: filtering via [`Task::matches`], creation-order
//! sorting for the newest/oldest toggle, and the overview statistics shown
//! by the presentation layer.

use crate::error::ValidationError;
use crate::task::list::TaskList;
use crate::task::model::{Priority, Status, Task};
use std::str::FromStr;

/// Display sort order over the creation timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently created first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            _ => Err(ValidationError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Overview counts for the active collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
    /// Pending tasks at high priority
    pub high_priority: usize,
}

impl TaskList {
    /// Select tasks passing the query and filters, in creation order
    pub fn filter(
        &self,
        query: &str,
        status: Option<Status>,
        priority: Option<Priority>,
    ) -> Vec<&Task> {
        self.iter()
            .filter(|t| t.matches(query, status, priority))
            .collect()
    }

    /// Select and sort tasks for display
    ///
    /// Applies [`TaskList::filter`] and then orders the result by creation
    /// timestamp. The sort is stable, so tasks created within the same
    /// instant keep their insertion order.
    pub fn filter_sorted(
        &self,
        query: &str,
        status: Option<Status>,
        priority: Option<Priority>,
        order: SortOrder,
    ) -> Vec<&Task> {
        let mut tasks = self.filter(query, status, priority);
        match order {
            SortOrder::Newest => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        tasks
    }

    /// Compute the overview counts
    pub fn stats(&self) -> Stats {
        Stats {
            total: self.len(),
            pending: self.iter().filter(|t| t.is_pending()).count(),
            done: self.iter().filter(|t| t.is_done()).count(),
            high_priority: self
                .iter()
                .filter(|t| t.is_pending() && t.priority == Priority::high)
                .count(),
        }
    }
}
