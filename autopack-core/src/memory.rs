//! In-memory filesystem for tests.
//!
//! Modification times come from a manual clock measured in whole seconds, so
//! staleness checks are deterministic no matter how fast the tests run.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::FileSystem;

const EPOCH_START: u64 = 1_700_000_000;

#[derive(Debug, Clone)]
struct MemoryFile {
    content: String,
    modified: u64,
}

/// In-memory [`FileSystem`] with an injectable clock.
#[derive(Debug)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, MemoryFile>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    clock: Cell<u64>,
    writes: Cell<usize>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        Self {
            files: RefCell::new(BTreeMap::new()),
            dirs: RefCell::new(BTreeSet::new()),
            clock: Cell::new(EPOCH_START),
            writes: Cell::new(0),
        }
    }

    /// Seed a file (builder style).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Seed a file stamped with the current clock. Not counted as a write.
    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        self.add_ancestors(path);
        self.files.borrow_mut().insert(
            path.to_path_buf(),
            MemoryFile {
                content: content.into(),
                modified: self.clock.get(),
            },
        );
    }

    /// Move the clock forward.
    pub fn advance(&self, secs: u64) {
        self.clock.set(self.clock.get() + secs);
    }

    /// Current clock value in seconds since the Unix epoch.
    pub fn now(&self) -> u64 {
        self.clock.get()
    }

    /// Stamp an existing file with the current clock.
    pub fn touch(&self, path: impl AsRef<Path>) {
        if let Some(file) = self.files.borrow_mut().get_mut(path.as_ref()) {
            file.modified = self.clock.get();
        }
    }

    /// Number of writes performed through [`FileSystem::write`].
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Content of a file, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|f| f.content.clone())
    }

    /// All file paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    fn add_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.contents(path).ok_or_else(|| Self::not_found(path))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.is_dir(path) {
            return Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            )));
        }
        self.insert(path, content);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.add_ancestors(path);
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        if !self.is_dir(path) {
            return Err(Self::not_found(path));
        }
        self.files.borrow_mut().retain(|p, _| !p.starts_with(path));
        self.dirs.borrow_mut().retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(path))
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.files
            .borrow()
            .get(path)
            .map(|f| UNIX_EPOCH + Duration::from_secs(f.modified))
            .ok_or_else(|| Self::not_found(path))
    }

    fn files_in_dirs_named(&self, root: &Path, dir_name: &str) -> io::Result<Vec<PathBuf>> {
        let files = self.files.borrow();
        let found = files
            .keys()
            .filter(|path| {
                let Some(parent) = path.parent() else {
                    return false;
                };
                let visible = path
                    .strip_prefix(root)
                    .map(|rel| {
                        rel.components()
                            .all(|c| !c.as_os_str().to_string_lossy().starts_with('.'))
                    })
                    .unwrap_or(false);
                visible && parent.file_name().is_some_and(|name| name == dir_name)
            })
            .cloned()
            .collect();
        Ok(found)
    }
}
