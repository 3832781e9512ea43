//! Filesystem collaborator.
//!
//! Everything the generator needs from the disk goes through [`FileSystem`],
//! so the staleness logic can run against an in-memory double in tests.

use std::{
    io,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use walkdir::WalkDir;

/// Abstract filesystem interface
///
/// Implementations:
/// - [`LocalFs`] - standard file I/O
/// - `MemoryFs` - in-memory with a manual clock, for testing
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write content to a file, replacing it and creating parent directories
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create a directory and all of its parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Recursively delete a directory
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Delete a single file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Last modification time of a file
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    /// List the files sitting directly inside any directory named `dir_name`
    /// at or below `root`, sorted by path.
    ///
    /// Hidden entries are skipped. A missing `root` yields an empty list.
    fn files_in_dirs_named(&self, root: &Path, dir_name: &str) -> io::Result<Vec<PathBuf>>;
}

/// Truncate a timestamp to whole seconds since the Unix epoch.
///
/// Timestamps before the epoch collapse to zero.
pub fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Standard local file I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn files_in_dirs_named(&self, root: &Path, dir_name: &str) -> io::Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.depth() == 0 || !entry.file_type().is_file() {
                continue;
            }
            let in_named_dir = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .is_some_and(|name| name == dir_name);
            if in_named_dir {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.js");

        LocalFs.write(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.js");

        LocalFs.write(&path, "first").unwrap();
        LocalFs.write(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_files_in_dirs_named_at_any_depth() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("app/javascript");
        let shallow = root.join("ror_components");
        let deep = root.join("bundles/Hello/ror_components");
        fs::create_dir_all(&shallow).unwrap();
        fs::create_dir_all(&deep).unwrap();
        fs::write(shallow.join("Top.jsx"), "").unwrap();
        fs::write(deep.join("Hello.client.jsx"), "").unwrap();
        fs::write(deep.join("Hello.server.jsx"), "").unwrap();
        fs::write(root.join("bundles/Hello/Other.jsx"), "").unwrap();

        let files = LocalFs.files_in_dirs_named(&root, "ror_components").unwrap();

        assert_eq!(
            files,
            vec![
                deep.join("Hello.client.jsx"),
                deep.join("Hello.server.jsx"),
                shallow.join("Top.jsx"),
            ]
        );
    }

    #[test]
    fn test_files_in_dirs_named_skips_hidden_and_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("ror_components");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join(".DS_Store"), "").unwrap();
        fs::write(dir.join("nested/Inner.jsx"), "").unwrap();
        fs::write(dir.join("Visible.jsx"), "").unwrap();

        let files = LocalFs
            .files_in_dirs_named(temp.path(), "ror_components")
            .unwrap();

        assert_eq!(files, vec![dir.join("Visible.jsx")]);
    }

    #[test]
    fn test_files_in_dirs_named_missing_root() {
        let temp = TempDir::new().unwrap();
        let files = LocalFs
            .files_in_dirs_named(&temp.path().join("missing"), "ror_components")
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_unix_seconds_truncates() {
        let time = UNIX_EPOCH + std::time::Duration::from_millis(5_999);
        assert_eq!(unix_seconds(time), 5);
    }
}
