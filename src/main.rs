//! Taskdesk - Main Entry Point
//!
//! A thin command-line front end over the `taskdesk` library. Each
//! subcommand maps onto exactly one tracker operation; a graphical shell
//! would drive the same calls.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use taskdesk::{TaskTracker, logging};

/// Taskdesk - single-user task tracker with countdown timers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the task files and the log
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Details (optional)
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Priority: high/medium/low
        #[arg(short, long, default_value = "medium")]
        priority: String,
        /// Due date, YYYY-MM-DD (optional)
        #[arg(long)]
        due: Option<String>,
        /// Countdown duration in seconds, 0 for no timer
        #[arg(short, long, default_value_t = 0)]
        timer: u32,
    },
    /// List tasks with search, filters, and sort
    List {
        /// Search text matched against titles
        #[arg(default_value = "")]
        query: String,
        /// Status filter: pending/done/all
        #[arg(short, long)]
        status: Option<String>,
        /// Priority filter: high/medium/low/all
        #[arg(short, long)]
        priority: Option<String>,
        /// Sort order: newest/oldest
        #[arg(long)]
        sort: Option<String>,
        /// List the archive instead of the active tasks
        #[arg(long)]
        archived: bool,
    },
    /// Edit fields of an existing task ("" clears an optional field)
    Edit {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
        #[arg(long)]
        due: Option<String>,
        /// New countdown duration in seconds
        #[arg(long)]
        timer_total: Option<u32>,
        /// New remaining seconds (must not exceed the total)
        #[arg(long)]
        timer_remaining: Option<u32>,
    },
    /// Mark a task done
    Done { id: u64 },
    /// Reopen a completed task
    Reopen { id: u64 },
    /// Move a task to the archive
    Archive { id: u64 },
    /// Restore an archived task to the active list
    Restore { id: u64 },
    /// Permanently delete a task (archive first, then active)
    Delete { id: u64 },
    /// Advance a task's countdown by elapsed seconds
    Tick {
        id: u64,
        #[arg(default_value_t = 1)]
        seconds: u32,
    },
    /// Reset a task's countdown to its configured total
    ResetTimer { id: u64 },
    /// Show overview counts
    Stats,
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    logging::init_logging(logging::default_log_level(), args.data_dir.join("log"))
        .map_err(anyhow::Error::msg)?;

    let mut tracker = TaskTracker::new(
        args.data_dir.join("tasks.toml"),
        args.data_dir.join("archive.toml"),
    )?;

    let reply = match args.command {
        Command::Add {
            title,
            description,
            priority,
            due,
            timer,
        } => tracker.handle_add(&title, description.as_deref(), &priority, due.as_deref(), timer)?,
        Command::List {
            query,
            status,
            priority,
            sort,
            archived,
        } => tracker.handle_list(
            &query,
            status.as_deref(),
            priority.as_deref(),
            sort.as_deref(),
            archived,
        )?,
        Command::Edit {
            id,
            title,
            description,
            priority,
            due,
            timer_total,
            timer_remaining,
        } => tracker.handle_update(
            id,
            title.as_deref(),
            description.as_deref(),
            priority.as_deref(),
            due.as_deref(),
            timer_total,
            timer_remaining,
        )?,
        Command::Done { id } => tracker.handle_complete(id)?,
        Command::Reopen { id } => tracker.handle_reopen(id)?,
        Command::Archive { id } => tracker.handle_archive(id)?,
        Command::Restore { id } => tracker.handle_restore(id)?,
        Command::Delete { id } => tracker.handle_delete(id)?,
        Command::Tick { id, seconds } => tracker.handle_tick(id, seconds)?,
        Command::ResetTimer { id } => tracker.handle_reset_timer(id)?,
        Command::Stats => tracker.handle_stats()?,
    };

    println!("{reply}");
    Ok(())
}
