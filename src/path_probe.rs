/// Stateless existence/type queries for filesystem paths.
///
/// Callers that need to branch on "does this path exist, and as what?"
/// use a single probe returning an explicit result instead of separate
/// `exists()`/`is_dir()` calls whose answers can drift between them.
use std::fs;
use std::path::Path;

/// What a path currently resolves to, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    NotFound,
    /// A regular file or a symlink (a movable leaf entry).
    File,
    /// A directory.
    Directory,
}

/// Probes a path and reports what it is.
///
/// Symlinks are classified as `File`: the link itself is the entry that
/// lives in the folder, regardless of what it points at.
pub fn probe(path: &Path) -> PathKind {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => PathKind::Directory,
        Ok(_) => PathKind::File,
        Err(_) => PathKind::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_probe_missing_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("nope");
        assert_eq!(probe(&missing), PathKind::NotFound);
    }

    #[test]
    fn test_probe_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "content").expect("Failed to write file");
        assert_eq!(probe(&file), PathKind::File);
    }

    #[test]
    fn test_probe_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().join("sub");
        fs::create_dir(&dir).expect("Failed to create directory");
        assert_eq!(probe(&dir), PathKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_symlink_is_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().join("sub");
        fs::create_dir(&dir).expect("Failed to create directory");
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&dir, &link).expect("Failed to create symlink");

        // The link points at a directory but is itself a leaf entry.
        assert_eq!(probe(&link), PathKind::File);
    }
}
