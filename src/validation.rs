//! Validation helpers for the operation surface
//!
//! This module contains the boundary parsing logic that turns raw user
//! input (always strings at the presentation edge) into typed domain
//! values. Every enumerated field is checked here before a value is ever
//! accepted into a task.

use crate::error::ValidationError;
use crate::task::{Priority, SortOrder, Status};
use chrono::NaiveDate;

/// Parse a priority value
///
/// # Arguments
/// * `priority_str` - Priority string to parse
///
/// # Returns
/// Result containing the parsed Priority or a ValidationError
pub fn parse_priority(priority_str: &str) -> Result<Priority, ValidationError> {
    priority_str.trim().parse()
}

/// Parse an optional priority filter ("all" and empty mean no filter)
pub fn parse_priority_filter(
    priority_str: Option<&str>,
) -> Result<Option<Priority>, ValidationError> {
    match priority_str.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => Ok(Some(s.parse()?)),
    }
}

/// Parse an optional status filter ("all" and empty mean no filter)
pub fn parse_status_filter(status_str: Option<&str>) -> Result<Option<Status>, ValidationError> {
    match status_str.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => Ok(Some(s.parse()?)),
    }
}

/// Parse a date in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date_str.trim().to_string()))
}

/// Parse an optional date field where an empty string clears the value
///
/// Returns the outer `Option` as "was the field mentioned at all" and the
/// inner `Option` as "set or clear", matching `TaskPatch` semantics.
pub fn parse_date_patch(
    date_str: Option<&str>,
) -> Result<Option<Option<NaiveDate>>, ValidationError> {
    match date_str.map(str::trim) {
        None => Ok(None),
        Some("") => Ok(Some(None)),
        Some(s) => Ok(Some(Some(parse_date(s)?))),
    }
}

/// Turn an optional text field into patch semantics (empty string clears)
pub fn parse_text_patch(text: Option<&str>) -> Option<Option<String>> {
    match text {
        None => None,
        Some(s) if s.trim().is_empty() => Some(None),
        Some(s) => Some(Some(s.to_string())),
    }
}

/// Parse a sort order, defaulting to newest-first
pub fn parse_sort_order(order_str: Option<&str>) -> Result<SortOrder, ValidationError> {
    match order_str.map(str::trim) {
        None | Some("") => Ok(SortOrder::default()),
        Some(s) => s.parse(),
    }
}
