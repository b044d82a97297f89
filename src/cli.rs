//! Command-line interface module for tidydown.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing and validation
//! - Home-shorthand expansion and the default download folder
//! - Root folder validation before the core runs
//! - Orchestration of selection and relocation
//! - Result messaging

use crate::output::Console;
use crate::path_probe::{self, PathKind};
use crate::{relocator, selector};
use chrono::{DateTime, Local};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Move files older than a retention window into year-month folders.
///
/// Scans the root folder's immediate entries once, picks the ones older than
/// the retention window, and moves them into a subfolder named after the
/// current month (for example `2026-08`). Entries newer than the window and
/// previously created dated folders are left alone.
#[derive(Debug, Parser)]
#[command(name = "tidydown", version)]
pub struct Cli {
    /// Folder to tidy; defaults to the platform download folder.
    /// A leading `~` expands to the home directory.
    #[arg(short = 'f', long = "folder")]
    pub folder: Option<String>,

    /// Days an entry must stay in the folder before it is moved.
    #[arg(short = 'd', long = "days", default_value_t = 0)]
    pub days: u32,

    /// Print verbose progress messages.
    #[arg(long)]
    pub debug: bool,
}

/// What a completed run amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    /// No entry was old enough to relocate.
    NothingToMove,
    /// This many entries were relocated into the dated folder.
    Moved(usize),
}

/// Runs the full pipeline for parsed arguments.
///
/// Resolves and validates the root folder, then selects and relocates
/// entries, printing a one-line summary. Any fatal failure is returned as a
/// descriptive message for `main` to print before terminating non-zero.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use tidydown::cli::{Cli, run};
///
/// let cli = Cli::parse_from(["tidydown", "--days", "30"]);
/// if let Err(e) = run(&cli) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run(cli: &Cli) -> Result<(), String> {
    let console = Console::new(cli.debug);
    let root = resolve_root(cli.folder.as_deref())?;
    console.debug(&format!(
        "tidying {} with a {}-day retention window",
        root.display(),
        cli.days
    ));

    let now = Local::now();
    match run_folder(&root, cli.days, now, &console)? {
        RunSummary::NothingToMove => {
            console.info("No files were eligible to move.");
        }
        RunSummary::Moved(count) => {
            console.success(&format!(
                "{} file(s) were moved to {}/",
                count,
                now.format("%Y-%m")
            ));
        }
    }

    Ok(())
}

/// Runs selection and relocation against an already-validated root folder.
///
/// The caller captures `now` once and reuses it for its own messaging; the
/// retention cutoff and the destination folder name both derive from it, so
/// a run straddling midnight or a month boundary stays consistent.
pub fn run_folder(
    root: &Path,
    days: u32,
    now: DateTime<Local>,
    console: &Console,
) -> Result<RunSummary, String> {
    let selected = selector::select(root, days, now).map_err(|e| e.to_string())?;
    if selected.is_empty() {
        return Ok(RunSummary::NothingToMove);
    }

    console.debug(&format!("{} entr(y/ies) selected:", selected.len()));
    for entry in &selected {
        console.debug(&format!(" - {}", entry.display()));
    }

    let moved = relocator::relocate(&selected, root, now, console).map_err(|e| e.to_string())?;
    Ok(RunSummary::Moved(moved))
}

/// Turns the optional CLI folder argument into a validated root path.
///
/// Without an argument the platform download folder (`$HOME/Downloads`) is
/// used. The path must exist, be a directory, and be writable.
fn resolve_root(folder: Option<&str>) -> Result<PathBuf, String> {
    let home = home_dir();
    let root = match folder {
        Some(raw) => expand_home(raw, home.ok().as_deref())?,
        None => home?.join("Downloads"),
    };

    match path_probe::probe(&root) {
        PathKind::Directory => {}
        PathKind::NotFound => {
            return Err(format!("Folder {} does not exist", root.display()));
        }
        PathKind::File => {
            return Err(format!("{} is not a folder", root.display()));
        }
    }

    let metadata = fs::metadata(&root)
        .map_err(|e| format!("Cannot inspect folder {}: {}", root.display(), e))?;
    if metadata.permissions().readonly() {
        return Err(format!("Folder {} is not writable", root.display()));
    }

    Ok(root)
}

/// Expands a leading `~` or `~/` to the home directory.
fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf, String> {
    if raw == "~" {
        return home
            .map(Path::to_path_buf)
            .ok_or_else(|| "HOME is not set; pass an explicit folder".to_string());
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return home
            .map(|h| h.join(rest))
            .ok_or_else(|| "HOME is not set; pass an explicit folder".to_string());
    }
    Ok(PathBuf::from(raw))
}

fn home_dir() -> Result<PathBuf, String> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| "HOME is not set; pass an explicit folder".to_string())
}
