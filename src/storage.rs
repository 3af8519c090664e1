//! File-based TOML storage for the task collection
//!
//! Writes are atomic: the collection is serialized to a temporary file in
//! the same directory, flushed and synced, then renamed over the target.
//! The live file is therefore always either the previous version or the
//! new one, never a partial write.
//!
//! Loads never block startup on a bad file. A file that fails to parse, or
//! that parses into a collection violating the domain invariants, is
//! copied aside to `<path>.bak` and an empty collection is returned so the
//! application can continue; the original bytes stay available for
//! diagnosis.

use crate::error::PersistenceError;
use crate::task::TaskList;
use log::{error, info};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the live file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Path the bytes of a corrupt file are quarantined to
    ///
    /// Sibling of the live file, overwritten on each corruption event.
    pub fn backup_path(&self) -> PathBuf {
        let mut path = OsString::from(self.file_path.as_os_str());
        path.push(".bak");
        PathBuf::from(path)
    }

    /// Load the task collection from disk
    ///
    /// An absent file yields an empty collection. A file that cannot be
    /// parsed, or whose contents violate the collection invariants, is
    /// backed up to [`Storage::backup_path`] and replaced by an empty
    /// collection in memory; one failure entry is logged per event.
    ///
    /// # Errors
    /// Only I/O failures surface: the file exists but cannot be read, or
    /// the quarantine copy cannot be written.
    pub fn load(&self) -> Result<TaskList, PersistenceError> {
        if !self.file_path.exists() {
            info!(
                "no task file at {}, starting with an empty collection",
                self.file_path.display()
            );
            return Ok(TaskList::new());
        }

        let content =
            fs::read_to_string(&self.file_path).map_err(|source| PersistenceError::Read {
                path: self.file_path.clone(),
                source,
            })?;

        match toml::from_str::<TaskList>(&content) {
            Ok(tasks) => match tasks.validate() {
                Ok(()) => {
                    info!(
                        "loaded {} task(s) from {}",
                        tasks.len(),
                        self.file_path.display()
                    );
                    Ok(tasks)
                }
                Err(violation) => self.quarantine(&format!("invariant violation: {violation}")),
            },
            Err(parse_err) => self.quarantine(&format!("parse error: {parse_err}")),
        }
    }

    /// Quarantine the corrupt file and fall back to an empty collection
    fn quarantine(&self, cause: &str) -> Result<TaskList, PersistenceError> {
        let backup = self.backup_path();
        fs::copy(&self.file_path, &backup).map_err(|source| PersistenceError::Backup {
            path: backup.clone(),
            source,
        })?;

        error!(
            "task file {} is corrupt ({}); original bytes preserved at {}, continuing with an empty collection",
            self.file_path.display(),
            cause,
            backup.display()
        );
        Ok(TaskList::new())
    }

    /// Write the complete task collection to disk atomically
    ///
    /// Serializes to a temporary file colocated with the target (so the
    /// final rename stays on one filesystem), syncs it, then renames it
    /// over the live file. On any failure the previous file is untouched
    /// and the temporary file is removed when dropped.
    pub fn save(&self, tasks: &TaskList) -> Result<(), PersistenceError> {
        let content = toml::to_string_pretty(tasks)?;

        let dir = self
            .file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| PersistenceError::Write {
            dir: dir.to_path_buf(),
            source,
        })?;
        tmp.write_all(content.as_bytes())
            .map_err(|source| PersistenceError::Write {
                dir: dir.to_path_buf(),
                source,
            })?;
        tmp.as_file()
            .sync_all()
            .map_err(|source| PersistenceError::Write {
                dir: dir.to_path_buf(),
                source,
            })?;

        tmp.persist(&self.file_path)
            .map_err(|persist_err| PersistenceError::Replace {
                path: self.file_path.clone(),
                source: persist_err.error,
            })?;

        info!(
            "saved {} task(s) to {}",
            tasks.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
