//! Typed error surface for the task tracker
//!
//! Two public error kinds exist:
//! - [`ValidationError`] - an attempted create or update would produce a
//!   task violating an invariant; always caught at the edit boundary, never
//!   allowed to reach persistence.
//! - [`PersistenceError`] - a file operation failed; surfaced to the user
//!   so in-memory state can be retried rather than lost.
//!
//! Corruption of the persisted file is not an error kind of its own: it is
//! handled inside `Storage::load` by quarantining the file and returning an
//! empty collection.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A create or update produced an invalid task value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("invalid priority '{0}'. Valid priorities: high, medium, low")]
    InvalidPriority(String),

    #[error("invalid status '{0}'. Valid statuses: pending, done")]
    InvalidStatus(String),

    #[error("invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2026-03-15')")]
    InvalidDate(String),

    #[error("invalid sort order '{0}'. Valid orders: newest, oldest")]
    InvalidSortOrder(String),

    #[error("timer remaining ({remaining}s) cannot exceed timer total ({total}s)")]
    TimerOutOfRange { remaining: u32, total: u32 },

    #[error("duplicate task id {0}")]
    DuplicateId(u64),

    #[error("no task with id {0}")]
    UnknownTask(u64),
}

/// A persisted-file operation could not be completed
///
/// Every variant carries the path it failed on; the live file is never left
/// half-written (see the atomic-write contract in `storage`).
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize task data: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write temporary file in {dir}: {source}")]
    Write {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to replace {path}: {source}")]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to back up corrupt file to {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
