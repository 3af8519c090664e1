//! Task domain model and business logic
//!
//! This module contains the core task data structures and their
//! implementations. It is split into submodules for better organization:
//! - `model`: the Task entity, its enums, and timer semantics
//! - `list`: the ordered task collection with create/update/complete operations
//! - `queries`: filtering, sorting, and overview statistics

mod list;
mod model;
mod queries;

// Re-export all public types
pub use list::TaskList;
pub use model::{Priority, Status, Task, TaskDraft, TaskPatch, local_datetime_now};
pub use queries::{SortOrder, Stats};
