/// Entry selection for folder tidying.
///
/// This module decides which immediate children of the root folder are old
/// enough to be relocated. Age is based on the origin timestamp (when the
/// entry was placed in the folder, i.e. its creation time), not on content
/// modification. Subfolders created by earlier runs are recognized by their
/// `YYYY-MM` name and never selected, so a dated folder can never end up
/// nested inside another dated folder.
use chrono::{DateTime, Duration, Local};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Errors that can occur while selecting entries.
#[derive(Debug)]
pub enum SelectError {
    /// The root folder could not be enumerated.
    ListingFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListingFailed { path, source } => {
                write!(f, "Failed to list folder {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SelectError {}

/// Returns the entries of `root` whose origin timestamp is at least
/// `retention_days` old, relative to `now`.
///
/// Only immediate children are considered; directories count as entries too,
/// unless their name matches the dated-folder pattern. A listing failure
/// aborts the whole selection — no partial result is returned.
///
/// # Errors
///
/// Returns `SelectError::ListingFailed` if the root folder cannot be read.
///
/// # Examples
///
/// ```no_run
/// use chrono::Local;
/// use std::path::Path;
///
/// let old_enough = tidydown::select(Path::new("/home/me/Downloads"), 30, Local::now());
/// match old_enough {
///     Ok(entries) => println!("{} entries to move", entries.len()),
///     Err(e) => eprintln!("Selection failed: {}", e),
/// }
/// ```
pub fn select(
    root: &Path,
    retention_days: u32,
    now: DateTime<Local>,
) -> Result<Vec<PathBuf>, SelectError> {
    let entries = fs::read_dir(root).map_err(|e| SelectError::ListingFailed {
        path: root.to_path_buf(),
        source: e,
    })?;

    let date_limit = now - Duration::days(i64::from(retention_days));
    let mut selected = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| SelectError::ListingFailed {
            path: root.to_path_buf(),
            source: e,
        })?;

        let name = entry.file_name().to_string_lossy().to_string();
        if is_dated_folder_name(&name) {
            continue;
        }

        if is_eligible(origin_timestamp(&entry.path()), date_limit) {
            selected.push(entry.path());
        }
    }

    Ok(selected)
}

/// Checks whether a base name matches the `YYYY-MM` destination pattern.
pub fn is_dated_folder_name(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}$").expect("dated-folder pattern is valid"));
    pattern.is_match(name)
}

/// An entry qualifies when it is as old as the limit or older.
fn is_eligible(origin: DateTime<Local>, date_limit: DateTime<Local>) -> bool {
    origin <= date_limit
}

/// Returns the time the entry was placed in its folder.
///
/// Reads the creation time of the entry itself (symlinks are not followed;
/// the link is what sits in the folder). When the filesystem cannot report a
/// creation time, the current instant is used instead, which keeps the entry
/// out of this run's selection: it can never be older than itself.
fn origin_timestamp(path: &Path) -> DateTime<Local> {
    match fs::symlink_metadata(path).and_then(|meta| meta.created()) {
        Ok(created) => DateTime::from(created),
        Err(_) => Local::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dated_folder_names_match() {
        assert!(is_dated_folder_name("2024-03"));
        assert!(is_dated_folder_name("1999-12"));
        assert!(is_dated_folder_name("2024-00")); // shape only, not a calendar check
    }

    #[test]
    fn test_non_dated_names_do_not_match() {
        assert!(!is_dated_folder_name("2024-3"));
        assert!(!is_dated_folder_name("2024-031"));
        assert!(!is_dated_folder_name("notes-2024-03"));
        assert!(!is_dated_folder_name("2024-03-backup"));
        assert!(!is_dated_folder_name("a.txt"));
        assert!(!is_dated_folder_name(""));
    }

    #[test]
    fn test_eligibility_boundary_is_inclusive() {
        let now = Local::now();
        let limit = now - Duration::days(30);

        assert!(is_eligible(limit, limit), "entry exactly at limit qualifies");
        assert!(is_eligible(limit - Duration::seconds(1), limit));
        assert!(!is_eligible(limit + Duration::seconds(1), limit));
        assert!(!is_eligible(now, limit));
    }

    #[test]
    fn test_eligibility_zero_day_window() {
        let now = Local::now();
        // With a zero-day window the limit is "now": anything that already
        // existed when the run started qualifies.
        assert!(is_eligible(now - Duration::seconds(5), now));
        assert!(!is_eligible(now + Duration::seconds(5), now));
    }

    #[test]
    fn test_select_zero_window_picks_existing_entries() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), "a").expect("Failed to write file");
        fs::write(root.join("b.txt"), "b").expect("Failed to write file");
        fs::create_dir(root.join("stuff")).expect("Failed to create subdir");

        // `now` is captured after the entries were created.
        let selected = select(root, 0, Local::now()).expect("Selection failed");

        let mut names: Vec<_> = selected
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.txt", "b.txt", "stuff"]);
    }

    #[test]
    fn test_select_skips_dated_folders_regardless_of_age() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::create_dir(root.join("2024-02")).expect("Failed to create dated folder");
        fs::write(root.join("loose.txt"), "x").expect("Failed to write file");

        let selected = select(root, 0, Local::now()).expect("Selection failed");

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0], root.join("loose.txt"));
    }

    #[test]
    fn test_select_large_window_picks_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::write(root.join("fresh.txt"), "x").expect("Failed to write file");

        let selected = select(root, 3650, Local::now()).expect("Selection failed");
        assert!(selected.is_empty());
    }

    #[test]
    fn test_select_missing_root_is_listing_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("vanished");

        let result = select(&missing, 0, Local::now());
        assert!(matches!(result, Err(SelectError::ListingFailed { .. })));
    }
}
