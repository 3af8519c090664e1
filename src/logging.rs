//! File-based diagnostic logging
//!
//! The log is an append-only stream of timestamped entries (load failures,
//! quarantine events, write errors, and each mutating operation). It is
//! read by people, never parsed by the application.
//!
//! Initialization is idempotent for the same directory and must happen
//! before the tracker is constructed so load-time quarantine events are
//! captured.

use flexi_logger::{FileSpec, Logger, LoggerHandle};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "taskdesk";

static LOGGER: OnceCell<(PathBuf, LoggerHandle)> = OnceCell::new();

/// Default log level for the current build mode
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

/// Initialize file logging into `log_dir`
///
/// Creates the directory if needed and appends to `taskdesk.log` inside
/// it. Calling this again with the same directory is a no-op; a different
/// directory is rejected rather than silently splitting the stream.
pub fn init_logging(level: &str, log_dir: impl AsRef<Path>) -> Result<(), String> {
    let log_dir = log_dir.as_ref().to_path_buf();

    if let Some((active_dir, _)) = LOGGER.get() {
        if *active_dir == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active_dir.display(),
            log_dir.display()
        ));
    }

    LOGGER
        .get_or_try_init(|| {
            std::fs::create_dir_all(&log_dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", log_dir.display())
            })?;

            let handle = Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_file(
                    FileSpec::default()
                        .directory(&log_dir)
                        .basename(LOG_FILE_BASENAME)
                        .suppress_timestamp(),
                )
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))?;

            Ok((log_dir.clone(), handle))
        })
        .map(|_| ())
}
