/// Relocation of selected entries into the current month's dated folder.
///
/// This module owns the destination side of a run: it derives the `YYYY-MM`
/// folder name from the current date, creates the folder when needed, and
/// moves each selected entry into it. A stale duplicate at the target path is
/// removed first; failing to remove one only skips that entry, while a failed
/// move aborts the run, since a rename that fails after the target was
/// cleared leaves a state the caller must know about immediately.
use crate::output::Console;
use crate::path_probe::{self, PathKind};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that abort a relocation run.
#[derive(Debug)]
pub enum RelocateError {
    /// The dated destination folder could not be created.
    DestinationCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Moving an entry into the destination folder failed.
    MoveFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
}

impl std::fmt::Display for RelocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DestinationCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create destination folder {}: {}",
                    path.display(),
                    source
                )
            }
            Self::MoveFailed {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for RelocateError {}

/// Outcome of clearing a target path before a move.
enum CollisionOutcome {
    /// Nothing was in the way.
    Clear,
    /// A stale entry occupied the target and was removed.
    Cleared,
    /// A stale entry occupied the target and could not be removed.
    CleanupFailed(std::io::Error),
}

/// Moves the given entries into `root/YYYY-MM` (named after `now`) and
/// returns how many were moved.
///
/// The destination folder is created on first use and silently reused when
/// it already exists, including across runs within the same month. An entry
/// whose target cannot be cleared of a stale duplicate is skipped and
/// reported on the debug channel; any other move failure is fatal.
///
/// # Errors
///
/// Returns `RelocateError::DestinationCreationFailed` when the dated folder
/// cannot be created, and `RelocateError::MoveFailed` when a rename fails.
/// On a fatal error the count of entries moved before it is not reported.
pub fn relocate(
    entries: &[PathBuf],
    root: &Path,
    now: DateTime<Local>,
    console: &Console,
) -> Result<usize, RelocateError> {
    let destination = root.join(now.format("%Y-%m").to_string());

    match path_probe::probe(&destination) {
        PathKind::Directory => {}
        PathKind::NotFound => {
            // Non-recursive: the root folder itself must already exist.
            fs::create_dir(&destination).map_err(|e| RelocateError::DestinationCreationFailed {
                path: destination.clone(),
                source: e,
            })?;
        }
        PathKind::File => {
            return Err(RelocateError::DestinationCreationFailed {
                path: destination.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "a file occupies the destination folder name",
                ),
            });
        }
    }

    let bar = console.progress_bar(entries.len() as u64);
    let mut moved = 0;

    for entry in entries {
        let Some(file_name) = entry.file_name() else {
            // Entries come from a folder listing, so this should not happen.
            console.debug(&format!("skipping {}: no name component", entry.display()));
            bar.inc(1);
            continue;
        };
        let target = destination.join(file_name);

        match clear_collision(&target) {
            CollisionOutcome::Clear => {}
            CollisionOutcome::Cleared => {
                console.debug(&format!("replaced stale entry at {}", target.display()));
            }
            CollisionOutcome::CleanupFailed(e) => {
                console.debug(&format!(
                    "could not clear existing {}: {}; entry left in place",
                    target.display(),
                    e
                ));
                bar.inc(1);
                continue;
            }
        }

        if let Err(e) = fs::rename(entry, &target) {
            bar.abandon();
            return Err(RelocateError::MoveFailed {
                source: entry.clone(),
                destination: target,
                source_error: e,
            });
        }

        console.debug(&format!(
            "moved {} to {}",
            entry.display(),
            target.display()
        ));
        moved += 1;
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(moved)
}

/// Removes whatever currently sits at the target path, best-effort.
fn clear_collision(target: &Path) -> CollisionOutcome {
    match path_probe::probe(target) {
        PathKind::NotFound => CollisionOutcome::Clear,
        PathKind::File => match fs::remove_file(target) {
            Ok(()) => CollisionOutcome::Cleared,
            Err(e) => CollisionOutcome::CleanupFailed(e),
        },
        PathKind::Directory => match fs::remove_dir_all(target) {
            Ok(()) => CollisionOutcome::Cleared,
            Err(e) => CollisionOutcome::CleanupFailed(e),
        },
    }
}
