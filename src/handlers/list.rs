//! List handler: search, filter, and sort tasks for display

use crate::TaskTracker;
use crate::formatting;
use crate::validation;
use anyhow::Result;

impl TaskTracker {
    /// **List**: Render tasks matching a search query and filters.
    ///
    /// The query is a case-insensitive substring match on the title.
    /// Status and priority filters accept their enum values or "all";
    /// sort accepts newest (default) or oldest.
    ///
    /// # Arguments
    /// * `query` - Search text, empty matches everything
    /// * `status` - Status filter: pending/done/all
    /// * `priority` - Priority filter: high/medium/low/all
    /// * `sort` - Sort order: newest/oldest
    /// * `archived` - List the archive instead of the active collection
    pub fn handle_list(
        &self,
        query: &str,
        status: Option<&str>,
        priority: Option<&str>,
        sort: Option<&str>,
        archived: bool,
    ) -> Result<String> {
        let status = validation::parse_status_filter(status)?;
        let priority = validation::parse_priority_filter(priority)?;
        let order = validation::parse_sort_order(sort)?;

        let collection = if archived { &self.archive } else { &self.tasks };
        let tasks = collection.filter_sorted(query, status, priority, order);
        Ok(formatting::format_tasks(&tasks))
    }
}
